//! Pipeline orchestration module
//!
//! This module wires preprocessing, per-axis frequency analysis, confidence
//! scoring, and overlay rendering into one analysis call.

mod thread_counter;


pub use thread_counter::ThreadCounter;

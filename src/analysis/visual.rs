//! Overlay rendering module
//!
//! This module draws the detected thread grid onto the original photograph
//! and encodes the result for transport.

mod overlay;

pub use overlay::render_overlay;

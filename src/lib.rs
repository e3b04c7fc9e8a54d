//! Fabric thread count estimation from photographs.
//!
//! The crate detects the periodic spacing of warp (vertical) and weft
//! (horizontal) threads in a fabric photograph: the image is binarized into a
//! thread map, two disjoint sample regions are reduced to 1-D intensity
//! profiles, and the dominant spatial frequency of each profile gives a
//! per-axis thread count.

pub mod analysis;
pub mod logger;

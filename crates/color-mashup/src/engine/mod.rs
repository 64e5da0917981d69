//! The mashup engine: aligns two profiles and rewrites destination pixels.
//!
//! # Algorithm
//!
//! ```text
//! K = min(max_colors, |source colors|, |destination colors|)
//!
//! for i in 0..K:
//!     for each coordinate in destination bucket ranked i:
//!         output[coordinate] = source color ranked i   (all four channels)
//! ```
//!
//! The output starts as a copy of the destination. Buckets ranked `K` or
//! lower are never touched, and since buckets are disjoint every pixel is
//! written at most once.

mod plan;

pub use plan::{mashup_pixels, ColorSwap, MashupPlan};

//! Exact RGBA color values.
//!
//! Colors are compared channel by channel with no tolerance: two pixels
//! share a bucket only when all four 8-bit channels match.

mod rgba;

pub use rgba::{premultiply, Rgba};

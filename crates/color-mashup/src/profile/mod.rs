//! Color profiling: exact-color frequency analysis of a raster.
//!
//! A [`ColorProfile`] groups every pixel coordinate of an image into a
//! bucket keyed by its exact [`Rgba`](crate::Rgba) value, then ranks the
//! distinct colors by bucket size, most frequent first.
//!
//! # Ranking Order
//!
//! Colors with equal pixel counts keep the order in which they were first
//! seen during the row-major scan (`y` outer, `x` inner). The ranking is
//! therefore fully determined by the image content.

mod color_profile;

pub use color_profile::{Bucket, ColorProfile};

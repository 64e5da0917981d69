//! color-mashup: swap the most prominent colors of one image into another
//!
//! The crate has two stages:
//!
//! 1. **Profiling** ([`ColorProfile`]): every pixel is quantized to an exact
//!    8-bit [`Rgba`] value and its [`Coordinate`] is appended to that color's
//!    bucket. Colors are ranked by bucket size, most frequent first; equal
//!    counts keep their first-occurrence order from the row-major scan.
//! 2. **Remapping** ([`MashupPlan`]): the destination's top-K buckets are
//!    paired with the source's top-K colors, and every coordinate in a
//!    paired bucket is overwritten with the source color. Alpha is replaced
//!    along with the color channels; nothing is blended.
//!
//! Decoding and encoding are left to the caller. Anything implementing
//! [`Raster`] can be profiled, and the result is a plain [`RgbaBuffer`].
//!
//! # Quick Start
//!
//! ```
//! use color_mashup::{mashup_pixels, Coordinate, Rgba, RgbaBuffer};
//!
//! let red = Rgba::opaque(255, 0, 0);
//! let blue = Rgba::opaque(0, 0, 255);
//! let green = Rgba::opaque(0, 255, 0);
//! let yellow = Rgba::opaque(255, 255, 0);
//!
//! // destination: 3 red pixels, 1 blue pixel
//! let mut destination = RgbaBuffer::filled(2, 2, red);
//! destination.put_pixel(Coordinate::new(1, 1), blue);
//!
//! // source: green seen first, then yellow, two pixels each
//! let mut source = RgbaBuffer::filled(2, 2, green);
//! source.put_pixel(Coordinate::new(0, 1), yellow);
//! source.put_pixel(Coordinate::new(1, 1), yellow);
//!
//! let output = mashup_pixels(&source, &destination, 2);
//! assert_eq!(output.pixel(Coordinate::new(0, 0)), green);
//! assert_eq!(output.pixel(Coordinate::new(1, 1)), yellow);
//! ```
//!
//! # Cost
//!
//! Profiling is one O(W×H) pass per image. Applying a plan touches only the
//! coordinates in the K swapped buckets, at most W×H writes.

pub mod color;
pub mod engine;
pub mod profile;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use color::{premultiply, Rgba};
pub use engine::{mashup_pixels, ColorSwap, MashupPlan};
pub use profile::{Bucket, ColorProfile};
pub use raster::{BufferError, Coordinate, Raster, RgbaBuffer};

//! Mashup - swap the most prominent colors of one image into another.
//!
//! This crate wires the pixel core in [`color_mashup`] to concrete image
//! formats and exposes the [`pipeline::mashup`] operation used by the
//! `mashup` binary.

pub mod codec;
pub mod error;
pub mod models;
pub mod pipeline;

pub use color_mashup;
pub use error::{CodecError, MashupError, Side};
pub use pipeline::{mashup, Input, MashupSummary, Output};

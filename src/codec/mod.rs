//! Image format capabilities.
//!
//! The core only knows [`Raster`](color_mashup::Raster) and
//! [`RgbaBuffer`]. This module supplies the bytes-to-pixels and
//! pixels-to-bytes halves:
//!
//! - [`ImageDecoder`]: decode (and decode-config) for a named format
//! - [`ImageEncoder`]: serialize an [`RgbaBuffer`]
//!
//! Built-in formats are [`Png`] and [`Jpeg`]. Anything else can be plugged
//! in with [`CustomDecoder`] and [`CustomEncoder`].

mod custom;
mod decoded;
mod jpeg;
mod png;
mod registry;

use std::io::{Read, Write};
use std::path::Path;

use color_mashup::RgbaBuffer;

use crate::error::CodecError;

pub use self::custom::{CustomDecoder, CustomEncoder};
pub use self::decoded::{DecodedImage, ImageInfo};
pub use self::jpeg::{Jpeg, DEFAULT_JPEG_QUALITY};
pub use self::png::Png;
pub use self::registry::FormatRegistry;

/// Decode capability for one image format.
pub trait ImageDecoder: Send + Sync {
    /// Human-readable format name, e.g. `"png"`.
    fn name(&self) -> &str;

    /// Short magic/extension token, e.g. `"jpg"`.
    fn magic(&self) -> &str;

    /// Decode a full image.
    fn decode(&self, reader: &mut dyn Read) -> Result<DecodedImage, CodecError>;

    /// Read only the header information.
    fn decode_config(&self, reader: &mut dyn Read) -> Result<ImageInfo, CodecError>;
}

/// Encode capability for one output format.
pub trait ImageEncoder: Send + Sync {
    /// Write `image`, whose pixels are alpha-premultiplied.
    fn encode(&self, image: &RgbaBuffer, writer: &mut dyn Write) -> Result<(), CodecError>;
}

/// Pick a built-in encoder from a file extension.
///
/// `quality` only applies to JPEG. Returns `None` for unknown extensions.
pub fn encoder_for_path(path: &Path, quality: u8) -> Option<Box<dyn ImageEncoder>> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(Box::new(Png)),
        "jpg" | "jpeg" => Some(Box::new(Jpeg::with_quality(quality))),
        _ => None,
    }
}

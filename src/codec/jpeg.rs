use std::io::{Cursor, Read, Write};

use color_mashup::RgbaBuffer;
use image::codecs::jpeg::{JpegDecoder, JpegEncoder};
use image::{DynamicImage, ExtendedColorType, ImageDecoder as _};

use super::{DecodedImage, ImageDecoder, ImageEncoder, ImageInfo};
use crate::error::CodecError;

/// Quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Built-in JPEG format.
///
/// Decoded pixels are always opaque. Encoding writes the buffer's
/// premultiplied color channels and drops alpha, since JPEG cannot store
/// it, so translucent pixels come out darkened as if laid over black.
/// Quality is configurable (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jpeg {
    quality: u8,
}

impl Jpeg {
    pub fn new() -> Self {
        Self::with_quality(DEFAULT_JPEG_QUALITY)
    }

    /// Quality is clamped to 1..=100.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for Jpeg {
    fn default() -> Self {
        Self::new()
    }
}

/// The image crate's JPEG decoder needs a seekable reader.
fn buffered(reader: &mut dyn Read) -> Result<Cursor<Vec<u8>>, CodecError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Cursor::new(bytes))
}

impl ImageDecoder for Jpeg {
    fn name(&self) -> &str {
        "jpeg"
    }

    fn magic(&self) -> &str {
        "jpg"
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<DecodedImage, CodecError> {
        let decoder = JpegDecoder::new(buffered(reader)?)?;
        let rgba = DynamicImage::from_decoder(decoder)?.into_rgba16();
        let (width, height) = rgba.dimensions();
        Ok(DecodedImage::from_rgba16(width, height, rgba.into_raw())?)
    }

    fn decode_config(&self, reader: &mut dyn Read) -> Result<ImageInfo, CodecError> {
        let decoder = JpegDecoder::new(buffered(reader)?)?;
        let (width, height) = decoder.dimensions();
        Ok(ImageInfo { width, height })
    }
}

impl ImageEncoder for Jpeg {
    fn encode(&self, image: &RgbaBuffer, writer: &mut dyn Write) -> Result<(), CodecError> {
        let rgb: Vec<u8> = image
            .as_bytes()
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect();
        let mut encoder = JpegEncoder::new_with_quality(writer, self.quality);
        encoder.encode(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)?;
        Ok(())
    }
}

use std::io::{Read, Write};

use color_mashup::RgbaBuffer;

use super::{DecodedImage, ImageDecoder, ImageEncoder, ImageInfo};
use crate::error::CodecError;

/// Built-in PNG format.
///
/// Decoding accepts every PNG color type and bit depth. Palette and
/// sub-byte images are expanded, `tRNS` becomes alpha, and 16-bit samples
/// keep their full precision. Encoding always writes 8-bit RGBA with
/// straight alpha, undoing the buffer's premultiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct Png;

impl ImageDecoder for Png {
    fn name(&self) -> &str {
        "png"
    }

    fn magic(&self) -> &str {
        "png"
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<DecodedImage, CodecError> {
        let mut decoder = ::png::Decoder::new(reader);
        decoder.set_transformations(::png::Transformations::EXPAND);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        let data = &buf[..frame.buffer_size()];

        let samples = widen_to_rgba16(data, frame.color_type, frame.bit_depth)?;
        tracing::trace!(
            width = frame.width,
            height = frame.height,
            color_type = ?frame.color_type,
            bit_depth = ?frame.bit_depth,
            "Decoded PNG"
        );
        Ok(DecodedImage::from_rgba16(frame.width, frame.height, samples)?)
    }

    fn decode_config(&self, reader: &mut dyn Read) -> Result<ImageInfo, CodecError> {
        let reader = ::png::Decoder::new(reader).read_info()?;
        let info = reader.info();
        Ok(ImageInfo {
            width: info.width,
            height: info.height,
        })
    }
}

impl ImageEncoder for Png {
    fn encode(&self, image: &RgbaBuffer, writer: &mut dyn Write) -> Result<(), CodecError> {
        let mut encoder = ::png::Encoder::new(writer, image.width(), image.height());
        encoder.set_color(::png::ColorType::Rgba);
        encoder.set_depth(::png::BitDepth::Eight);
        let straight: Vec<u8> = image
            .pixels()
            .flat_map(|p| p.unpremultiplied().to_bytes())
            .collect();
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&straight)?;
        writer.finish()?;
        Ok(())
    }
}

/// Convert expanded PNG output (8 or 16 bit, gray/gray-alpha/RGB/RGBA) to
/// 16-bit RGBA samples.
fn widen_to_rgba16(
    data: &[u8],
    color_type: ::png::ColorType,
    bit_depth: ::png::BitDepth,
) -> Result<Vec<u16>, CodecError> {
    use ::png::{BitDepth, ColorType};

    let samples: Vec<u16> = match bit_depth {
        BitDepth::Eight => data.iter().map(|&b| b as u16 * 257).collect(),
        BitDepth::Sixteen => data
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect(),
        other => {
            return Err(CodecError::Unsupported(format!(
                "{other:?} bit PNG samples after expansion"
            )))
        }
    };

    const OPAQUE: u16 = u16::MAX;
    let rgba = match color_type {
        ColorType::Rgba => samples,
        ColorType::Rgb => samples
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], OPAQUE])
            .collect(),
        ColorType::GrayscaleAlpha => samples
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        ColorType::Grayscale => samples
            .iter()
            .flat_map(|&v| [v, v, v, OPAQUE])
            .collect(),
        ColorType::Indexed => {
            return Err(CodecError::Unsupported(
                "indexed PNG was not expanded".to_string(),
            ))
        }
    };
    Ok(rgba)
}

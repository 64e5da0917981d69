use std::fmt;
use std::io::{Read, Write};

use color_mashup::RgbaBuffer;

use super::{DecodedImage, ImageDecoder, ImageEncoder, ImageInfo};
use crate::error::CodecError;

type DecodeFn = dyn Fn(&mut dyn Read) -> Result<DecodedImage, CodecError> + Send + Sync;
type DecodeConfigFn = dyn Fn(&mut dyn Read) -> Result<ImageInfo, CodecError> + Send + Sync;

/// A caller-supplied format built from a name, a magic token and two
/// decode closures.
///
/// # Example
///
/// ```
/// use std::io::Read;
///
/// use mashup::codec::{CustomDecoder, DecodedImage, ImageDecoder, ImageInfo};
///
/// // A toy format: width byte, height byte, then RGBA bytes.
/// let raw = CustomDecoder::new(
///     "raw",
///     "raw",
///     |r| {
///         let mut bytes = Vec::new();
///         r.read_to_end(&mut bytes)?;
///         let (w, h) = (bytes[0] as u32, bytes[1] as u32);
///         Ok(DecodedImage::from_rgba8(w, h, &bytes[2..])?)
///     },
///     |r| {
///         let mut header = [0u8; 2];
///         r.read_exact(&mut header)?;
///         Ok(ImageInfo { width: header[0] as u32, height: header[1] as u32 })
///     },
/// );
///
/// let info = raw.decode_config(&mut &[1u8, 1, 9, 9, 9, 255][..]).unwrap();
/// assert_eq!(info, ImageInfo { width: 1, height: 1 });
/// ```
pub struct CustomDecoder {
    name: String,
    magic: String,
    decode: Box<DecodeFn>,
    decode_config: Box<DecodeConfigFn>,
}

impl CustomDecoder {
    pub fn new<D, C>(
        name: impl Into<String>,
        magic: impl Into<String>,
        decode: D,
        decode_config: C,
    ) -> Self
    where
        D: Fn(&mut dyn Read) -> Result<DecodedImage, CodecError> + Send + Sync + 'static,
        C: Fn(&mut dyn Read) -> Result<ImageInfo, CodecError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            magic: magic.into(),
            decode: Box::new(decode),
            decode_config: Box::new(decode_config),
        }
    }
}

impl fmt::Debug for CustomDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDecoder")
            .field("name", &self.name)
            .field("magic", &self.magic)
            .finish_non_exhaustive()
    }
}

impl ImageDecoder for CustomDecoder {
    fn name(&self) -> &str {
        &self.name
    }

    fn magic(&self) -> &str {
        &self.magic
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<DecodedImage, CodecError> {
        (self.decode)(reader)
    }

    fn decode_config(&self, reader: &mut dyn Read) -> Result<ImageInfo, CodecError> {
        (self.decode_config)(reader)
    }
}

/// A caller-supplied encoder wrapping a closure.
pub struct CustomEncoder<F> {
    encode: F,
}

impl<F> CustomEncoder<F>
where
    F: Fn(&RgbaBuffer, &mut dyn Write) -> Result<(), CodecError> + Send + Sync,
{
    pub fn new(encode: F) -> Self {
        Self { encode }
    }
}

impl<F> ImageEncoder for CustomEncoder<F>
where
    F: Fn(&RgbaBuffer, &mut dyn Write) -> Result<(), CodecError> + Send + Sync,
{
    fn encode(&self, image: &RgbaBuffer, writer: &mut dyn Write) -> Result<(), CodecError> {
        (self.encode)(image, writer)
    }
}

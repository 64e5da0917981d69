use color_mashup::{premultiply, BufferError, Raster, RgbaBuffer};

/// Dimensions reported by [`ImageDecoder::decode_config`](super::ImageDecoder::decode_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// A decoded pixel grid with 16-bit, straight-alpha RGBA samples.
///
/// Decoders of 8-bit formats widen each sample by 257. The [`Raster`] view
/// premultiplies each pixel, so every fully transparent pixel reads as
/// `[0, 0, 0, 0]` whatever its stored color channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl DecodedImage {
    /// Wrap `[R, G, B, A, ...]` 16-bit samples in row-major order.
    pub fn from_rgba16(width: u32, height: u32, samples: Vec<u16>) -> Result<Self, BufferError> {
        let expected = sample_count(width, height)?;
        if samples.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Widen `[R, G, B, A, ...]` 8-bit samples.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, BufferError> {
        let samples = bytes.iter().map(|&b| b as u16 * 257).collect();
        Self::from_rgba16(width, height, samples)
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
        }
    }
}

impl From<RgbaBuffer> for DecodedImage {
    fn from(buffer: RgbaBuffer) -> Self {
        let (width, height) = (buffer.width(), buffer.height());
        let samples = buffer
            .pixels()
            .flat_map(|p| p.unpremultiplied().to_rgba16())
            .collect();
        Self {
            width,
            height,
            samples,
        }
    }
}

impl Raster for DecodedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        premultiply([
            self.samples[i],
            self.samples[i + 1],
            self.samples[i + 2],
            self.samples[i + 3],
        ])
    }
}

fn sample_count(width: u32, height: u32) -> Result<usize, BufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(BufferError::TooLarge { width, height })
}

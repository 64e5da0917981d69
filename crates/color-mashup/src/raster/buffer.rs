//! Owned 8-bit RGBA pixel buffer.

use super::{BufferError, Coordinate, Raster};
use crate::color::Rgba;

/// An owned, row-major, 8-bit RGBA pixel buffer with premultiplied alpha.
///
/// This is the output side of a mashup: it is seeded from the destination
/// image and then written pixel by pixel. It also implements [`Raster`], so
/// a buffer can be profiled like any decoded image.
///
/// # Example
///
/// ```
/// use color_mashup::{Coordinate, Rgba, RgbaBuffer};
///
/// let mut buffer = RgbaBuffer::filled(2, 2, Rgba::opaque(0, 0, 0));
/// buffer.put_pixel(Coordinate::new(1, 0), Rgba::opaque(255, 255, 255));
///
/// assert_eq!(buffer.pixel(Coordinate::new(1, 0)), Rgba::opaque(255, 255, 255));
/// assert_eq!(buffer.as_bytes().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let count = width as usize * height as usize;
        let data = color.to_bytes().repeat(count);
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw premultiplied `[R, G, B, A, ...]` bytes in row-major order.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(BufferError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Materialize any [`Raster`] as 8-bit RGBA, quantizing each channel
    /// with [`Rgba::from_rgba16`].
    pub fn from_raster<R: Raster + ?Sized>(raster: &R) -> Self {
        let (width, height) = (raster.width(), raster.height());
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&Rgba::from_rgba16(raster.rgba16(x, y)).to_bytes());
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the buffer.
    #[inline]
    pub fn pixel(&self, at: Coordinate) -> Rgba {
        let i = self.offset(at);
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Overwrite all four channels at `at`. No blending takes place.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the buffer.
    #[inline]
    pub fn put_pixel(&mut self, at: Coordinate, color: Rgba) {
        let i = self.offset(at);
        self.data[i..i + 4].copy_from_slice(&color.to_bytes());
    }

    /// Raw bytes, `[R, G, B, A, ...]`, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
    }

    #[inline]
    fn offset(&self, at: Coordinate) -> usize {
        assert!(
            at.x < self.width && at.y < self.height,
            "coordinate ({}, {}) outside {}x{} buffer",
            at.x,
            at.y,
            self.width,
            self.height
        );
        (at.y as usize * self.width as usize + at.x as usize) * 4
    }
}

impl Raster for RgbaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        self.pixel(Coordinate::new(x, y)).to_rgba16()
    }
}

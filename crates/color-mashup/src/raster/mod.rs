//! The abstract image capability consumed by the profiler and engine.
//!
//! Decoding lives outside this crate. Anything that can report its bounds
//! and answer a per-pixel color query implements [`Raster`]; the mutable
//! output side is the concrete [`RgbaBuffer`].

mod buffer;
mod error;

pub use buffer::RgbaBuffer;
pub use error::BufferError;

/// A pixel position within an image's bounds.
///
/// `x` grows to the right, `y` grows downwards, both starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Read access to a decoded image.
///
/// Channels are reported 16-bit-scaled (0..=65535) in R, G, B, A order, with
/// color channels premultiplied by alpha. An 8-bit source scales its samples
/// by 257; a source with straight alpha runs them through
/// [`premultiply`](crate::premultiply). Pixels whose premultiplied values
/// match, such as all fully transparent ones, are the same color.
pub trait Raster {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// Color of the pixel at `(x, y)`.
    ///
    /// Callers only query coordinates in `[0, width) × [0, height)`.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

impl<R: Raster + ?Sized> Raster for &R {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        (**self).rgba16(x, y)
    }
}

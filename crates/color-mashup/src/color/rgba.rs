//! 8-bit RGBA color type

use std::fmt;

/// Divisor that maps a 16-bit-scaled channel (0..=65535) onto 0..=255.
const CHANNEL_SCALE: u16 = 257;

/// An exact RGBA color with 8 bits per channel.
///
/// Colors taken from a [`Raster`](crate::Raster) or stored in an
/// [`RgbaBuffer`](crate::RgbaBuffer) are alpha-premultiplied. Equality and
/// hashing use all four channels, so colors that differ only in alpha land
/// in different buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a color from its four 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Quantize 16-bit-scaled channels down to 8 bits.
    ///
    /// Each channel is divided by 257 (truncating), the standard 16→8 bit
    /// down-scaling: `0xFFFF` maps to `0xFF` and `v * 257` maps back to `v`.
    ///
    /// # Example
    /// ```
    /// use color_mashup::Rgba;
    /// let c = Rgba::from_rgba16([0xFFFF, 0x8080, 0x0000, 0xFFFF]);
    /// assert_eq!(c, Rgba::new(255, 128, 0, 255));
    /// ```
    #[inline]
    pub fn from_rgba16(channels: [u16; 4]) -> Self {
        let [r, g, b, a] = channels.map(|c| (c / CHANNEL_SCALE) as u8);
        Self { r, g, b, a }
    }

    /// Widen to 16-bit-scaled channels (`v * 257`).
    #[inline]
    pub fn to_rgba16(self) -> [u16; 4] {
        self.to_bytes().map(|c| c as u16 * CHANNEL_SCALE)
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Undo alpha premultiplication.
    ///
    /// Fully transparent colors become `#00000000`; channels that exceed
    /// alpha saturate at 255.
    ///
    /// # Example
    /// ```
    /// use color_mashup::Rgba;
    /// assert_eq!(Rgba::new(128, 0, 0, 128).unpremultiplied(), Rgba::new(255, 0, 0, 128));
    /// ```
    pub fn unpremultiplied(self) -> Self {
        match self.a {
            0 => Self::new(0, 0, 0, 0),
            255 => self,
            a => {
                let a = a as u32 * CHANNEL_SCALE as u32;
                let straight =
                    |c: u8| ((c as u32 * CHANNEL_SCALE as u32 * 0xFFFF / a) >> 8).min(255) as u8;
                Self::new(straight(self.r), straight(self.g), straight(self.b), self.a)
            }
        }
    }
}

/// Scale straight 16-bit channels by their alpha.
///
/// This is the color a [`Raster`](crate::Raster) reports for a pixel stored
/// with straight alpha. Every fully transparent pixel maps to `[0, 0, 0, 0]`.
///
/// # Example
/// ```
/// use color_mashup::premultiply;
/// assert_eq!(premultiply([0xFFFF, 0x1234, 0, 0]), [0, 0, 0, 0]);
/// assert_eq!(premultiply([0xFFFF, 0, 0, 0x8080]), [0x8080, 0, 0, 0x8080]);
/// ```
#[inline]
pub fn premultiply(channels: [u16; 4]) -> [u16; 4] {
    let [r, g, b, a] = channels.map(u32::from);
    let scale = |c: u32| (c * a / 0xFFFF) as u16;
    [scale(r), scale(g), scale(b), a as u16]
}

impl fmt::Display for Rgba {
    /// Formats as `#RRGGBBAA` (uppercase).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

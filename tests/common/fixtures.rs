//! Test fixtures: named colors and in-memory images.

use color_mashup::{Rgba, RgbaBuffer};
use mashup::codec::{ImageEncoder, Jpeg, Png};

/// Named colors used across tests
pub mod colors {
    use color_mashup::Rgba;

    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    /// Premultiplied; stored in a PNG as straight (255, 0, 0, 128)
    pub const HALF_CLEAR_RED: Rgba = Rgba::new(128, 0, 0, 128);
}

/// Build a buffer from row-major colors.
pub fn buffer(width: u32, height: u32, pixels: &[Rgba]) -> RgbaBuffer {
    let data = pixels.iter().flat_map(|c| c.to_bytes()).collect();
    RgbaBuffer::from_raw(width, height, data).expect("pixel count must match dimensions")
}

/// Encode row-major colors as an 8-bit RGBA PNG.
pub fn png_bytes(width: u32, height: u32, pixels: &[Rgba]) -> Vec<u8> {
    let mut bytes = Vec::new();
    Png.encode(&buffer(width, height, pixels), &mut bytes)
        .expect("PNG encoding should succeed");
    bytes
}

/// Encode straight-alpha `[R, G, B, A]` pixels as-is, bypassing the
/// premultiplied buffer so hidden color channels survive.
pub fn straight_png_bytes(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header should encode");
        writer
            .write_image_data(&pixels.concat())
            .expect("PNG data should encode");
    }
    bytes
}

/// Encode a single-color image as JPEG.
pub fn jpeg_bytes(width: u32, height: u32, color: Rgba, quality: u8) -> Vec<u8> {
    let mut bytes = Vec::new();
    Jpeg::with_quality(quality)
        .encode(&RgbaBuffer::filled(width, height, color), &mut bytes)
        .expect("JPEG encoding should succeed");
    bytes
}

/// Destination of the 2x2 scenario: 3 red pixels, blue at the bottom right.
pub fn red_blue_destination() -> Vec<u8> {
    use self::colors::*;
    png_bytes(2, 2, &[RED, RED, RED, BLUE])
}

/// Source of the 2x2 scenario: green on top (seen first), yellow below.
pub fn green_yellow_source() -> Vec<u8> {
    use self::colors::*;
    png_bytes(2, 2, &[GREEN, GREEN, YELLOW, YELLOW])
}

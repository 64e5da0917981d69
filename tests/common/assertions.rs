//! Assertion helpers for tests.

use color_mashup::{Coordinate, RgbaBuffer};
use mashup::codec::{ImageDecoder, Png};
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Assert bytes start with the PNG signature and decode them
pub fn assert_png(bytes: &[u8]) -> RgbaBuffer {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    let decoded = Png
        .decode(&mut &bytes[..])
        .expect("output PNG should decode");
    RgbaBuffer::from_raster(&decoded)
}

/// Assert bytes start with the JPEG SOI marker
pub fn assert_jpeg(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0xFF, 0xD8]),
        "Expected JPEG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..2.min(bytes.len())]
    );
}

/// Assert two buffers are identical, reporting the first differing pixel
pub fn assert_same_pixels(actual: &RgbaBuffer, expected: &RgbaBuffer) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "dimensions differ"
    );
    for y in 0..expected.height() {
        for x in 0..expected.width() {
            let at = Coordinate::new(x, y);
            assert_eq!(actual.pixel(at), expected.pixel(at), "pixel ({x}, {y})");
        }
    }
}

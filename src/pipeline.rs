//! The top-level mashup operation: decode, profile, remap, encode.

use std::io::{Read, Write};
use std::sync::Arc;

use color_mashup::{ColorProfile, MashupPlan, Rgba, RgbaBuffer};

use crate::codec::{DecodedImage, ImageDecoder, ImageEncoder, Jpeg, Png};
use crate::error::{CodecError, MashupError, Side};

/// A byte stream bound to the decoder for its format.
pub struct Input<'a> {
    reader: Box<dyn Read + 'a>,
    decoder: Arc<dyn ImageDecoder>,
}

impl<'a> Input<'a> {
    pub fn new(reader: impl Read + 'a, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            reader: Box::new(reader),
            decoder,
        }
    }

    pub fn png(reader: impl Read + 'a) -> Self {
        Self::new(reader, Arc::new(Png))
    }

    pub fn jpeg(reader: impl Read + 'a) -> Self {
        Self::new(reader, Arc::new(Jpeg::new()))
    }

    /// Name of the bound format.
    pub fn format(&self) -> &str {
        self.decoder.name()
    }

    fn decode(mut self, side: Side) -> Result<DecodedImage, MashupError> {
        self.decoder
            .decode(&mut self.reader)
            .map_err(|source| MashupError::Decode { side, source })
    }
}

/// A byte sink bound to an encoder.
pub struct Output<'a> {
    writer: Box<dyn Write + 'a>,
    encoder: Box<dyn ImageEncoder + 'a>,
}

impl<'a> Output<'a> {
    pub fn new(writer: impl Write + 'a, encoder: impl ImageEncoder + 'a) -> Self {
        Self {
            writer: Box::new(writer),
            encoder: Box::new(encoder),
        }
    }

    /// Like [`Output::new`] for an already boxed encoder.
    pub fn boxed(writer: impl Write + 'a, encoder: Box<dyn ImageEncoder + 'a>) -> Self {
        Self {
            writer: Box::new(writer),
            encoder,
        }
    }

    pub fn png(writer: impl Write + 'a) -> Self {
        Self::new(writer, Png)
    }

    /// JPEG output at `quality` (clamped to 1..=100).
    pub fn jpeg(writer: impl Write + 'a, quality: u8) -> Self {
        Self::new(writer, Jpeg::with_quality(quality))
    }

    fn encode(mut self, image: &RgbaBuffer) -> Result<(), CodecError> {
        self.encoder.encode(image, &mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// One swapped color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapSummary {
    pub rank: usize,
    /// Destination color that was replaced.
    pub from: Rgba,
    /// Source color written in its place.
    pub to: Rgba,
    /// Pixels rewritten.
    pub pixels: usize,
}

/// What a successful mashup did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MashupSummary {
    pub width: u32,
    pub height: u32,
    pub swaps: Vec<SwapSummary>,
}

impl MashupSummary {
    /// K, the number of swapped colors.
    pub fn colors_swapped(&self) -> usize {
        self.swaps.len()
    }

    pub fn pixels_changed(&self) -> usize {
        self.swaps.iter().map(|s| s.pixels).sum()
    }
}

/// Build a color mashup of `src` and `dst` and encode it into `out`.
///
/// The destination's `max_colors` most frequent colors are replaced by the
/// source's equally ranked colors. When either image has fewer distinct
/// colors, that count becomes the limit. `max_colors == 0` re-encodes the
/// destination unchanged.
///
/// Decode failures abort before anything is written to `out`.
///
/// # Example
///
/// ```
/// use mashup::codec::{ImageEncoder, Png};
/// use mashup::pipeline::{mashup, Input, Output};
/// use color_mashup::{Rgba, RgbaBuffer};
///
/// let mut src = Vec::new();
/// Png.encode(&RgbaBuffer::filled(2, 2, Rgba::opaque(0, 128, 0)), &mut src).unwrap();
/// let mut dst = Vec::new();
/// Png.encode(&RgbaBuffer::filled(4, 4, Rgba::opaque(200, 0, 0)), &mut dst).unwrap();
///
/// let mut out = Vec::new();
/// let summary = mashup(
///     Input::png(&src[..]),
///     Input::png(&dst[..]),
///     Output::png(&mut out),
///     3,
/// )
/// .unwrap();
///
/// assert_eq!(summary.colors_swapped(), 1);
/// assert_eq!(summary.pixels_changed(), 16);
/// ```
pub fn mashup(
    src: Input<'_>,
    dst: Input<'_>,
    out: Output<'_>,
    max_colors: usize,
) -> Result<MashupSummary, MashupError> {
    tracing::debug!(
        source_format = src.format(),
        destination_format = dst.format(),
        max_colors,
        "Starting mashup"
    );

    let src_image = src.decode(Side::Source)?;
    let src_profile = ColorProfile::from_raster(&src_image);
    drop(src_image);
    tracing::debug!(
        width = src_profile.width(),
        height = src_profile.height(),
        colors = src_profile.distinct_colors(),
        "Profiled source"
    );

    let dst_image = dst.decode(Side::Destination)?;
    let dst_profile = ColorProfile::from_raster(&dst_image);
    tracing::debug!(
        width = dst_profile.width(),
        height = dst_profile.height(),
        colors = dst_profile.distinct_colors(),
        "Profiled destination"
    );

    let plan = MashupPlan::new(&src_profile, &dst_profile, max_colors);
    tracing::debug!(
        colors = plan.len(),
        pixels = plan.pixel_count(),
        "Planned color swaps"
    );
    let mut output = RgbaBuffer::from_raster(&dst_image);
    drop(dst_image);
    plan.apply(&mut output);

    let summary = MashupSummary {
        width: output.width(),
        height: output.height(),
        swaps: plan
            .swaps()
            .iter()
            .map(|s| SwapSummary {
                rank: s.rank,
                from: s.target.color(),
                to: s.replacement,
                pixels: s.target.len(),
            })
            .collect(),
    };

    out.encode(&output).map_err(MashupError::Encode)?;

    tracing::info!(
        colors = summary.colors_swapped(),
        pixels = summary.pixels_changed(),
        width = summary.width,
        height = summary.height,
        "Mashup complete"
    );
    Ok(summary)
}

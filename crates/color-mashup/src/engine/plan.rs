use crate::color::Rgba;
use crate::profile::{Bucket, ColorProfile};
use crate::raster::{Raster, RgbaBuffer};

/// One aligned pair of the plan: every pixel of the destination bucket
/// becomes `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwap<'a> {
    /// Rank shared by both colors (0 = most frequent).
    pub rank: usize,
    /// Destination bucket being overwritten.
    pub target: &'a Bucket,
    /// Source color written over the bucket.
    pub replacement: Rgba,
}

/// Alignment of the top-K destination buckets with the top-K source colors.
///
/// The plan borrows both profiles; it is built and consumed within a single
/// mashup.
///
/// # Example
///
/// ```
/// use color_mashup::{ColorProfile, MashupPlan, Rgba, RgbaBuffer};
///
/// let source = RgbaBuffer::filled(2, 2, Rgba::opaque(0, 255, 0));
/// let destination = RgbaBuffer::filled(3, 1, Rgba::opaque(255, 0, 0));
///
/// let src = ColorProfile::from_raster(&source);
/// let dst = ColorProfile::from_raster(&destination);
/// let plan = MashupPlan::new(&src, &dst, 5);
/// assert_eq!(plan.len(), 1);
///
/// let mut output = RgbaBuffer::from_raster(&destination);
/// plan.apply(&mut output);
/// assert!(output.pixels().all(|p| p == Rgba::opaque(0, 255, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct MashupPlan<'a> {
    swaps: Vec<ColorSwap<'a>>,
}

impl<'a> MashupPlan<'a> {
    /// Pair the first `K = min(max_colors, |source|, |destination|)` ranked
    /// colors of both profiles.
    pub fn new(source: &'a ColorProfile, destination: &'a ColorProfile, max_colors: usize) -> Self {
        let swaps = destination
            .ranked_buckets()
            .zip(source.ranked())
            .take(max_colors)
            .enumerate()
            .map(|(rank, (target, replacement))| ColorSwap {
                rank,
                target,
                replacement,
            })
            .collect();
        Self { swaps }
    }

    /// K, the number of swapped colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    pub fn swaps(&self) -> &[ColorSwap<'a>] {
        &self.swaps
    }

    /// Total number of pixels the plan rewrites.
    pub fn pixel_count(&self) -> usize {
        self.swaps.iter().map(|s| s.target.len()).sum()
    }

    /// Overwrite every planned coordinate of `output` with its replacement.
    ///
    /// `output` must have the destination's dimensions.
    ///
    /// # Panics
    ///
    /// Panics if a planned coordinate lies outside `output`.
    pub fn apply(&self, output: &mut RgbaBuffer) {
        for swap in &self.swaps {
            for &at in swap.target.coordinates() {
                output.put_pixel(at, swap.replacement);
            }
        }
    }
}

/// Profile both rasters and return the destination with its top
/// `max_colors` colors replaced by the source's.
///
/// # Example
///
/// ```
/// use color_mashup::{mashup_pixels, Rgba, RgbaBuffer};
///
/// let source = RgbaBuffer::filled(1, 1, Rgba::opaque(0, 0, 255));
/// let destination = RgbaBuffer::filled(2, 2, Rgba::opaque(255, 255, 0));
///
/// let unchanged = mashup_pixels(&source, &destination, 0);
/// assert_eq!(unchanged, destination);
///
/// let swapped = mashup_pixels(&source, &destination, 1);
/// assert!(swapped.pixels().all(|p| p == Rgba::opaque(0, 0, 255)));
/// ```
pub fn mashup_pixels<S, D>(source: &S, destination: &D, max_colors: usize) -> RgbaBuffer
where
    S: Raster + ?Sized,
    D: Raster + ?Sized,
{
    let src = ColorProfile::from_raster(source);
    let dst = ColorProfile::from_raster(destination);
    let mut output = RgbaBuffer::from_raster(destination);
    MashupPlan::new(&src, &dst, max_colors).apply(&mut output);
    output
}

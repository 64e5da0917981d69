use std::collections::HashMap;

use crate::color::Rgba;
use crate::raster::{Coordinate, Raster};

/// All coordinates sharing one exact color, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    color: Rgba,
    coordinates: Vec<Coordinate>,
}

impl Bucket {
    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of pixels with this color.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Frequency-ranked color buckets for one image.
///
/// Built once by [`ColorProfile::from_raster`] and immutable afterwards.
///
/// # Example
///
/// ```
/// use color_mashup::{ColorProfile, Coordinate, Rgba, RgbaBuffer};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let blue = Rgba::opaque(0, 0, 255);
/// let mut image = RgbaBuffer::filled(2, 2, red);
/// image.put_pixel(Coordinate::new(1, 1), blue);
///
/// let profile = ColorProfile::from_raster(&image);
/// assert_eq!(profile.ranked().collect::<Vec<_>>(), vec![red, blue]);
/// assert_eq!(profile.count(red), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ColorProfile {
    /// Buckets in order of first occurrence.
    buckets: Vec<Bucket>,
    /// Color -> index into `buckets`.
    index: HashMap<Rgba, usize>,
    /// Indices into `buckets`, descending by size, ties by first occurrence.
    ranking: Vec<usize>,
    width: u32,
    height: u32,
}

impl ColorProfile {
    /// Scan every pixel of `raster` and bucket it by quantized color.
    ///
    /// A zero-sized raster yields an empty profile.
    pub fn from_raster<R: Raster + ?Sized>(raster: &R) -> Self {
        let (width, height) = (raster.width(), raster.height());
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut index: HashMap<Rgba, usize> = HashMap::new();

        for y in 0..height {
            for x in 0..width {
                let color = Rgba::from_rgba16(raster.rgba16(x, y));
                let slot = *index.entry(color).or_insert_with(|| {
                    buckets.push(Bucket {
                        color,
                        coordinates: Vec::new(),
                    });
                    buckets.len() - 1
                });
                buckets[slot].coordinates.push(Coordinate::new(x, y));
            }
        }

        // Stable sort: equal counts stay in first-occurrence order.
        let mut ranking: Vec<usize> = (0..buckets.len()).collect();
        ranking.sort_by(|&a, &b| buckets[b].len().cmp(&buckets[a].len()));

        Self {
            buckets,
            index,
            ranking,
            width,
            height,
        }
    }

    /// Width of the profiled image.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the profiled image.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of distinct colors.
    #[inline]
    pub fn distinct_colors(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Colors from most to least frequent.
    pub fn ranked(&self) -> impl ExactSizeIterator<Item = Rgba> + '_ {
        self.ranking.iter().map(move |&i| self.buckets[i].color)
    }

    /// Buckets from most to least frequent.
    pub fn ranked_buckets(&self) -> impl ExactSizeIterator<Item = &Bucket> + '_ {
        self.ranking.iter().map(move |&i| &self.buckets[i])
    }

    /// The bucket holding `color`, if the image contains it.
    pub fn bucket(&self, color: Rgba) -> Option<&Bucket> {
        self.index.get(&color).map(|&i| &self.buckets[i])
    }

    /// Number of pixels with exactly `color` (0 if absent).
    pub fn count(&self, color: Rgba) -> usize {
        self.bucket(color).map_or(0, Bucket::len)
    }

    /// Buckets in order of first occurrence during the scan.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

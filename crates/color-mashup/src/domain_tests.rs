//! Regression tests for the profiling and remapping guarantees.
//!
//! Each test names the property it protects so a failure points at the
//! broken guarantee rather than at an implementation detail.

#[cfg(test)]
mod domain_tests {
    use std::collections::HashSet;

    use crate::color::{premultiply, Rgba};
    use crate::engine::{mashup_pixels, MashupPlan};
    use crate::profile::ColorProfile;
    use crate::raster::{Coordinate, Raster, RgbaBuffer};

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    const YELLOW: Rgba = Rgba::opaque(255, 255, 0);

    /// A raster that reports raw 16-bit channels, like a 16-bit PNG.
    struct Wide {
        width: u32,
        height: u32,
        pixels: Vec<[u16; 4]>,
    }

    impl Raster for Wide {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
            self.pixels[(y * self.width + x) as usize]
        }
    }

    /// Deterministic pseudo-random image with a small palette so buckets
    /// have varied sizes and plenty of ties.
    fn noisy_image(width: u32, height: u32, seed: u32) -> RgbaBuffer {
        let palette = [RED, BLUE, GREEN, YELLOW, Rgba::new(10, 20, 30, 40)];
        let mut state = seed;
        let mut image = RgbaBuffer::filled(width, height, RED);
        for y in 0..height {
            for x in 0..width {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let color = palette[(state >> 16) as usize % palette.len()];
                image.put_pixel(Coordinate::new(x, y), color);
            }
        }
        image
    }

    // ========================================================================
    // Profile invariants
    // ========================================================================

    /// If this breaks, pixels are being dropped or double-counted during the
    /// scan.
    #[test]
    fn test_bucket_sizes_sum_to_pixel_count() {
        for (w, h) in [(1, 1), (7, 3), (16, 16), (0, 5)] {
            let image = noisy_image(w, h, w * 31 + h);
            let profile = ColorProfile::from_raster(&image);
            let total: usize = profile.buckets().iter().map(|b| b.len()).sum();
            assert_eq!(total, (w * h) as usize, "{w}x{h} image");
        }
    }

    /// If this breaks, a coordinate was filed under two colors or not at all.
    #[test]
    fn test_every_coordinate_in_exactly_one_bucket() {
        let image = noisy_image(13, 9, 7);
        let profile = ColorProfile::from_raster(&image);
        let mut seen = HashSet::new();
        for bucket in profile.buckets() {
            for &at in bucket.coordinates() {
                assert!(seen.insert(at), "coordinate {at:?} in two buckets");
                assert_eq!(image.pixel(at), bucket.color());
            }
        }
        assert_eq!(seen.len(), 13 * 9);
    }

    /// If this breaks, the ranking is not sorted by frequency.
    #[test]
    fn test_ranking_non_increasing() {
        let image = noisy_image(20, 20, 99);
        let profile = ColorProfile::from_raster(&image);
        let counts: Vec<usize> = profile.ranked_buckets().map(|b| b.len()).collect();
        assert!(
            counts.windows(2).all(|w| w[0] >= w[1]),
            "ranking out of order: {counts:?}"
        );
    }

    /// If this breaks, the 16->8 bit quantization is no longer `/257`, and
    /// near-identical 16-bit samples stop sharing a bucket.
    #[test]
    fn test_sixteen_bit_channels_quantize_by_257() {
        let raster = Wide {
            width: 3,
            height: 1,
            pixels: vec![
                [0x8080, 0, 0, 0xFFFF],
                [0x80FF, 0, 0, 0xFFFF], // 33023 / 257 = 128
                [0x8181, 0, 0, 0xFFFF], // 33153 / 257 = 129
            ],
        };
        let profile = ColorProfile::from_raster(&raster);
        assert_eq!(profile.distinct_colors(), 2);
        assert_eq!(profile.count(Rgba::opaque(128, 0, 0)), 2);
        assert_eq!(profile.count(Rgba::opaque(129, 0, 0)), 1);
    }

    /// If this breaks, invisible pixels are split by their hidden color
    /// channels and a transparent background no longer ranks as one color.
    #[test]
    fn test_transparent_pixels_share_one_bucket() {
        let straight = [
            [0xFFFF, 0, 0, 0],
            [0, 0xFFFF, 0, 0],
            [0, 0, 0xFFFF, 0xFFFF],
        ];
        let raster = Wide {
            width: 3,
            height: 1,
            pixels: straight.into_iter().map(premultiply).collect(),
        };
        let profile = ColorProfile::from_raster(&raster);
        assert_eq!(profile.distinct_colors(), 2);
        assert_eq!(profile.ranked().next(), Some(Rgba::new(0, 0, 0, 0)));

        let grey = RgbaBuffer::filled(1, 1, Rgba::opaque(9, 9, 9));
        let output = mashup_pixels(&grey, &raster, 1);
        assert_eq!(output.pixel(Coordinate::new(0, 0)), Rgba::opaque(9, 9, 9));
        assert_eq!(output.pixel(Coordinate::new(1, 0)), Rgba::opaque(9, 9, 9));
        assert_eq!(output.pixel(Coordinate::new(2, 0)), BLUE);
    }

    // ========================================================================
    // Mashup behavior
    // ========================================================================

    /// If this breaks, a zero color budget is still rewriting pixels.
    #[test]
    fn test_zero_max_colors_returns_destination() {
        let source = noisy_image(4, 4, 1);
        let destination = noisy_image(5, 3, 2);
        assert_eq!(mashup_pixels(&source, &destination, 0), destination);
    }

    /// If this breaks, K is not min(distinct counts) when max_colors is
    /// generous, or pixels outside the top-K buckets are being modified.
    #[test]
    fn test_large_max_colors_swaps_all_aligned_buckets() {
        let source = noisy_image(6, 6, 3);
        let destination = noisy_image(8, 5, 4);
        let src = ColorProfile::from_raster(&source);
        let dst = ColorProfile::from_raster(&destination);
        let k = src.distinct_colors().min(dst.distinct_colors());

        let plan = MashupPlan::new(&src, &dst, usize::MAX);
        assert_eq!(plan.len(), k);

        let output = mashup_pixels(&source, &destination, usize::MAX);
        let src_ranked: Vec<Rgba> = src.ranked().collect();
        for (rank, bucket) in dst.ranked_buckets().enumerate() {
            for &at in bucket.coordinates() {
                let expected = if rank < k {
                    src_ranked[rank]
                } else {
                    bucket.color()
                };
                assert_eq!(output.pixel(at), expected, "rank {rank} at {at:?}");
            }
        }
    }

    /// If this breaks, tie-breaking depends on something other than the
    /// image content (e.g. hash iteration order).
    #[test]
    fn test_repeated_mashups_are_identical() {
        let source = noisy_image(10, 10, 5);
        let destination = noisy_image(10, 10, 6);
        let first = mashup_pixels(&source, &destination, 3);
        for _ in 0..5 {
            assert_eq!(mashup_pixels(&source, &destination, 3), first);
        }
    }

    /// Destination {red: 3, blue: 1}, source {green: 2, yellow: 2} with green
    /// seen first. Red takes green, blue takes yellow.
    #[test]
    fn test_two_by_two_scenario() {
        let mut destination = RgbaBuffer::filled(2, 2, RED);
        destination.put_pixel(Coordinate::new(1, 1), BLUE);

        let mut source = RgbaBuffer::filled(2, 2, GREEN);
        source.put_pixel(Coordinate::new(0, 1), YELLOW);
        source.put_pixel(Coordinate::new(1, 1), YELLOW);

        let output = mashup_pixels(&source, &destination, 2);
        assert_eq!(output.pixel(Coordinate::new(0, 0)), GREEN);
        assert_eq!(output.pixel(Coordinate::new(1, 0)), GREEN);
        assert_eq!(output.pixel(Coordinate::new(0, 1)), GREEN);
        assert_eq!(output.pixel(Coordinate::new(1, 1)), YELLOW);
    }

    /// A uniform destination has one bucket, so only one swap happens no
    /// matter how many colors are requested.
    #[test]
    fn test_uniform_destination_takes_top_source_color() {
        let destination = RgbaBuffer::filled(3, 3, BLUE);
        let source = noisy_image(4, 4, 8);
        let top = ColorProfile::from_raster(&source).ranked().next().unwrap();

        let src = ColorProfile::from_raster(&source);
        let dst = ColorProfile::from_raster(&destination);
        assert_eq!(MashupPlan::new(&src, &dst, 5).len(), 1);

        let output = mashup_pixels(&source, &destination, 5);
        assert!(output.pixels().all(|p| p == top));
    }

    /// An empty destination produces an empty, unmodified output.
    #[test]
    fn test_empty_destination() {
        let destination = RgbaBuffer::filled(0, 0, RED);
        let output = mashup_pixels(&noisy_image(2, 2, 9), &destination, 4);
        assert_eq!(output.width(), 0);
        assert_eq!(output.height(), 0);
        assert!(output.as_bytes().is_empty());
    }
}

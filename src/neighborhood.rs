use crate::buffer::{PixelBuffer, CHANNELS};

/// Per channel totals over the in-bounds part of a square window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborhoodSum {
    /// Channel sums, in buffer byte order.
    pub sums: [u64; CHANNELS],
    /// How many pixels went into `sums`.
    pub count: u64,
}

impl NeighborhoodSum {
    /// Truncating per channel mean.
    ///
    /// # Panics
    ///
    /// if `count` is zero, which can't happen for a center inside the image.
    pub fn average(&self) -> [u8; CHANNELS] {
        // mean of u8s is always a u8
        self.sums.map(|s| (s / self.count) as u8)
    }
}

/// Sum every pixel within `radius` of `(x, y)`, both axes.
///
/// Samples that would fall off the image (or off the end of the buffer) are skipped
/// rather than clamped, so windows near edges average fewer pixels. For `(x, y)` inside
/// the image the center always counts, so `count >= 1`.
///
/// # Panics
///
/// in debug builds, if `(x, y)` is outside the image.
pub fn neighborhood_sum(src: &PixelBuffer, x: usize, y: usize, radius: u32) -> NeighborhoodSum {
    debug_assert!(
        x < src.width() && y < src.height(),
        "center ({x}, {y}) outside {}x{} image",
        src.width(),
        src.height()
    );
    let r = usize::try_from(radius).unwrap_or(usize::MAX);
    let mut acc = NeighborhoodSum::default();
    if src.width() == 0 || src.height() == 0 {
        return acc;
    }
    let xs = x.saturating_sub(r)..=x.saturating_add(r).min(src.width() - 1);
    let ys = y.saturating_sub(r)..=y.saturating_add(r).min(src.height() - 1);
    let bytes = src.bytes();
    for ny in ys {
        let row = ny * src.stride();
        for nx in xs.clone() {
            let at = row + nx * CHANNELS;
            let Some(px) = bytes.get(at..at + CHANNELS) else {
                continue;
            };
            for (sum, &b) in acc.sums.iter_mut().zip(px) {
                *sum += u64::from(b);
            }
            acc.count += 1;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> PixelBuffer {
        let bytes = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
        PixelBuffer::packed(width, height, bytes).unwrap()
    }

    /// Walks every offset of the window, as the definition reads.
    fn naive(src: &PixelBuffer, x: usize, y: usize, radius: u32) -> NeighborhoodSum {
        let r = radius as i64;
        let mut acc = NeighborhoodSum::default();
        for dy in -r..=r {
            for dx in -r..=r {
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                if nx < 0 || ny < 0 || nx >= src.width() as i64 || ny >= src.height() as i64 {
                    continue;
                }
                let px = src.pixel(nx as usize, ny as usize).unwrap();
                for c in 0..3 {
                    acc.sums[c] += u64::from(px[c]);
                }
                acc.count += 1;
            }
        }
        acc
    }

    #[test]
    fn radius_zero_is_center() {
        let img = ramp(4, 3);
        let s = neighborhood_sum(&img, 2, 1, 0);
        assert_eq!(s.count, 1);
        assert_eq!(s.average(), img.pixel(2, 1).unwrap());
    }

    #[test]
    fn window_shrinks_at_edges() {
        let img = ramp(5, 5);
        assert_eq!(neighborhood_sum(&img, 0, 0, 1).count, 4);
        assert_eq!(neighborhood_sum(&img, 2, 0, 1).count, 6);
        assert_eq!(neighborhood_sum(&img, 2, 2, 1).count, 9);
        assert_eq!(neighborhood_sum(&img, 4, 4, 2).count, 9);
        assert_eq!(neighborhood_sum(&img, 2, 2, 100).count, 25);
    }

    #[test]
    fn matches_offset_walk() {
        let img = ramp(7, 5);
        for radius in 0..4 {
            for y in 0..5 {
                for x in 0..7 {
                    let s = neighborhood_sum(&img, x, y, radius);
                    assert!(s.count >= 1);
                    assert_eq!(s, naive(&img, x, y, radius), "({x}, {y}) r={radius}");
                }
            }
        }
    }

    #[test]
    fn ignores_padding() {
        let mut bytes = vec![200; 2 * 8];
        bytes[6..8].fill(0);
        bytes[14..16].fill(0);
        let img = PixelBuffer::new(2, 2, 8, bytes).unwrap();
        let s = neighborhood_sum(&img, 1, 1, 3);
        assert_eq!(s.count, 4);
        assert_eq!(s.average(), [200; 3]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic = "outside 4x3 image"]
    fn center_must_be_inside() {
        neighborhood_sum(&ramp(4, 3), 4, 0, 1);
    }

    #[test]
    fn sums_do_not_overflow() {
        let img = PixelBuffer::filled(300, 300, [255; 3]).unwrap();
        let s = neighborhood_sum(&img, 150, 150, u32::MAX);
        assert_eq!(s.count, 90_000);
        assert_eq!(s.sums, [255 * 90_000; 3]);
    }
}

//! Pre-processing filters
//!
//! Filters transform a normalized raster into another raster before
//! any decomposition runs. They are optional and composable; the
//! orchestrator applies them in order.

use pixelator_core::{Raster, SAMPLES_PER_PIXEL};

use crate::error::IoResult;

/// A raster-to-raster pre-processing step
pub trait Filter {
    /// Apply the filter, producing a new raster.
    fn apply(&self, raster: &Raster) -> IoResult<Raster>;
}

/// Reduces the dynamic range of an image on a per-channel basis.
///
/// A first pass finds the maximum value of each channel; a second pass
/// rescales every sample onto a logarithmic curve,
/// `out = ln(1 + in) * 255 / ln(1 + max)`, which lifts dark detail
/// while keeping each channel's maximum at 255. A channel that is zero
/// everywhere is left at zero.
#[derive(Debug, Default)]
pub struct DynamicRangeReduce;

impl Filter for DynamicRangeReduce {
    fn apply(&self, raster: &Raster) -> IoResult<Raster> {
        let width = raster.width();
        let height = raster.height();

        // Pass 1: per-channel maximum.
        let mut max = [0u8; SAMPLES_PER_PIXEL];
        for y in 0..height {
            let row = raster.row_rgb(y, 0, width);
            for px in row.chunks_exact(SAMPLES_PER_PIXEL) {
                for c in 0..SAMPLES_PER_PIXEL {
                    max[c] = max[c].max(px[c]);
                }
            }
        }

        let scale: [f64; SAMPLES_PER_PIXEL] = std::array::from_fn(|c| {
            if max[c] == 0 {
                0.0
            } else {
                255.0 / (1.0 + max[c] as f64).ln()
            }
        });

        // Pass 2: rescale every sample.
        let stride = width as usize * SAMPLES_PER_PIXEL;
        let mut data = Vec::with_capacity(stride * height as usize);
        for y in 0..height {
            let row = raster.row_rgb(y, 0, width);
            for px in row.chunks_exact(SAMPLES_PER_PIXEL) {
                for c in 0..SAMPLES_PER_PIXEL {
                    data.push(((1.0 + px[c] as f64).ln() * scale[c]) as u8);
                }
            }
        }

        Ok(Raster::from_raw(width, height, stride, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelator_core::Rgb;

    #[test]
    fn test_channel_maximum_maps_to_full_range() {
        let raster = Raster::from_fn(4, 1, |x, _| Rgb::new((x * 40) as u8, 0, 0)).unwrap();
        let out = DynamicRangeReduce.apply(&raster).unwrap();
        // max red input (120) lands on 255
        assert_eq!(out.sample(3, 0).unwrap().r, 255);
        // zero input stays zero
        assert_eq!(out.sample(0, 0).unwrap().r, 0);
    }

    #[test]
    fn test_log_curve_lifts_midtones() {
        let raster = Raster::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb::new(64, 64, 64)
            } else {
                Rgb::new(255, 255, 255)
            }
        })
        .unwrap();
        let out = DynamicRangeReduce.apply(&raster).unwrap();
        // ln(65) / ln(256) ~ 0.7528: well above the linear 64/255.
        let lifted = out.sample(0, 0).unwrap().r;
        assert!(lifted > 180 && lifted < 200, "got {}", lifted);
        assert_eq!(out.sample(1, 0).unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_all_zero_channel_left_alone() {
        let raster = Raster::from_fn(3, 3, |_, _| Rgb::new(10, 0, 200)).unwrap();
        let out = DynamicRangeReduce.apply(&raster).unwrap();
        let px = out.sample(1, 1).unwrap();
        assert_eq!(px.g, 0);
        assert_eq!(px.r, 255);
        assert_eq!(px.b, 255);
    }

    #[test]
    fn test_output_shape_matches_input() {
        let raster = Raster::from_fn(5, 7, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        let out = DynamicRangeReduce.apply(&raster).unwrap();
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 7);
    }
}

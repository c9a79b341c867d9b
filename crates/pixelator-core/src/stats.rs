//! Region statistics
//!
//! Mean color and color variance over a rectangular region of a
//! raster. These are the two measurements the adaptive decomposition
//! is built on: the mean becomes a block's color, the variance decides
//! whether the block is homogeneous enough to stop subdividing.
//!
//! The variance here is the combined sum of squared deviations over all
//! pixels and all three channels. It is deliberately not averaged or
//! normalized; callers comparing it against a per-channel threshold
//! must scale the bound by `3 * area` themselves.

use crate::color::Rgb;
use crate::raster::{Raster, SAMPLES_PER_PIXEL};
use crate::region::Region;

/// Compute the per-channel arithmetic mean color over a region.
///
/// Channel sums are accumulated in `u64` and divided by the region
/// area with truncating integer division.
///
/// The region must lie within the raster bounds; this is the caller's
/// responsibility (the decomposition only ever produces in-bounds
/// regions by construction).
///
/// # Panics
///
/// Panics if the region extends outside the raster.
pub fn mean_color(raster: &Raster, region: &Region) -> Rgb {
    let mut sum = [0u64; SAMPLES_PER_PIXEL];
    for y in region.y..region.bottom() {
        let row = raster.row_rgb(y, region.x, region.width);
        for px in row.chunks_exact(SAMPLES_PER_PIXEL) {
            sum[0] += px[0] as u64;
            sum[1] += px[1] as u64;
            sum[2] += px[2] as u64;
        }
    }
    let area = region.area();
    Rgb::new(
        (sum[0] / area) as u8,
        (sum[1] / area) as u8,
        (sum[2] / area) as u8,
    )
}

/// Compute the combined 3-channel sum of squared deviations from
/// `mean` over a region.
///
/// Zero for a perfectly uniform region, and never negative.
///
/// # Panics
///
/// Panics if the region extends outside the raster.
pub fn color_variance(raster: &Raster, region: &Region, mean: Rgb) -> f64 {
    let mr = mean.r as f64;
    let mg = mean.g as f64;
    let mb = mean.b as f64;

    let mut variance = 0.0f64;
    for y in region.y..region.bottom() {
        let row = raster.row_rgb(y, region.x, region.width);
        for px in row.chunks_exact(SAMPLES_PER_PIXEL) {
            let dr = px[0] as f64 - mr;
            let dg = px[1] as f64 - mg;
            let db = px[2] as f64 - mb;
            variance += dr * dr + dg * dg + db * db;
        }
    }
    variance
}

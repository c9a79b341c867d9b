//! pixelator-io - Image input and pre-processing
//!
//! Decodes image files and normalizes them into the fixed
//! [`pixelator_core::Raster`] layout (8-bit RGB, R,G,B sample order)
//! that the rest of the pipeline assumes. Whatever the source format
//! stores - palettes, alpha channels, BGR-ordered rows, 16-bit
//! samples - the conversion happens exactly once, here.
//!
//! Optional pre-processing [`Filter`]s run on the normalized raster
//! before decomposition.
//!
//! # Examples
//!
//! ```no_run
//! let raster = pixelator_io::read_raster("photo.png").unwrap();
//! assert!(raster.width() > 0);
//! ```

pub mod error;
pub mod filter;

pub use error::{IoError, IoResult};
pub use filter::{DynamicRangeReduce, Filter};

use std::path::Path;

use image::DynamicImage;
use pixelator_core::{Raster, SAMPLES_PER_PIXEL};

/// Normalize a decoded image into a raster.
///
/// # Errors
///
/// Returns [`IoError::Core`] if the decoded image has a zero
/// dimension.
pub fn raster_from_image(img: &DynamicImage) -> IoResult<Raster> {
    let rgb = img.to_rgb8();
    let width = rgb.width();
    let height = rgb.height();
    let stride = width as usize * SAMPLES_PER_PIXEL;
    Ok(Raster::from_raw(width, height, stride, rgb.into_raw())?)
}

/// Read an image file and normalize it into a raster.
///
/// The format is inferred from the file contents; every format the
/// decoder supports is accepted.
///
/// # Errors
///
/// Returns [`IoError::Io`] / [`IoError::Decode`] for unreadable or
/// undecodable files, and [`IoError::Core`] for degenerate decoded
/// dimensions.
pub fn read_raster(path: impl AsRef<Path>) -> IoResult<Raster> {
    let img = image::open(path)?;
    raster_from_image(&img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelator_core::Rgb;

    #[test]
    fn test_normalize_rgb_image() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_fn(4, 2, |x, y| {
            image::Rgb([x as u8, y as u8, 200])
        }));
        let raster = raster_from_image(&img).unwrap();
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.sample(3, 1).unwrap(), Rgb::new(3, 1, 200));
    }

    #[test]
    fn test_normalize_discards_alpha() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([10, 20, 30, 40]),
        ));
        let raster = raster_from_image(&img).unwrap();
        assert_eq!(raster.sample(1, 1).unwrap(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_normalize_expands_grayscale() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(
            3,
            3,
            image::Luma([77]),
        ));
        let raster = raster_from_image(&img).unwrap();
        assert_eq!(raster.sample(0, 0).unwrap(), Rgb::new(77, 77, 77));
    }

    #[test]
    fn test_read_raster_missing_file() {
        assert!(read_raster("definitely/not/a/file.png").is_err());
    }
}

//! pixelator-core - Core data structures for the pixelator converter
//!
//! This crate provides the building blocks shared by every stage of the
//! image-to-markup pipeline:
//!
//! - **[`Rgb`]** - an 8-bit RGB color value
//! - **[`Region`]** - an integer rectangle in pixel space
//! - **[`Raster`]** - the normalized, read-only RGB8 pixel buffer
//! - **Region statistics** - mean color and color variance over a
//!   rectangular region
//!
//! # Examples
//!
//! ```
//! use pixelator_core::{mean_color, Raster, Region, Rgb};
//!
//! let raster = Raster::from_fn(8, 8, |x, _| {
//!     if x < 4 { Rgb::new(0, 0, 0) } else { Rgb::new(200, 0, 0) }
//! }).unwrap();
//!
//! let left = Region::new(0, 0, 4, 8).unwrap();
//! assert_eq!(mean_color(&raster, &left), Rgb::new(0, 0, 0));
//! ```

pub mod color;
pub mod error;
pub mod raster;
pub mod region;
pub mod stats;

pub use color::Rgb;
pub use error::{Error, Result};
pub use raster::{Raster, SAMPLES_PER_PIXEL};
pub use region::Region;
pub use stats::{color_variance, mean_color};

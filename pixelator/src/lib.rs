//! pixelator - Convert raster images into nested HTML table mosaics
//!
//! The umbrella crate: re-exports the member crates and provides the
//! orchestration layer - the [`Strategy`] trait, the static strategy
//! registry, and output document assembly.
//!
//! # Pipeline
//!
//! ```text
//! image file -> Raster (pixelator-io) -> Quadtree (pixelator-quadtree)
//!            -> Table (pixelator-html) -> HTML document (this crate)
//! ```
//!
//! # Examples
//!
//! ```
//! use pixelator::core::{Raster, Rgb};
//! use pixelator::strategy::{strategies, Options};
//! use pixelator::document::render_image_section;
//!
//! let raster = Raster::from_fn(16, 16, |_, _| Rgb::new(200, 0, 0)).unwrap();
//! let list = strategies(&Options::default());
//! let section = render_image_section("red.png", &raster, &list).unwrap();
//! assert!(section.contains("<h3>Quadtree</h3>"));
//! ```

pub mod document;
pub mod error;
pub mod strategy;

// Re-export member crates
pub use pixelator_core as core;
pub use pixelator_html as html;
pub use pixelator_io as io;
pub use pixelator_quadtree as quadtree;

pub use document::{document_shell, render_image_section, render_strategy};
pub use error::{PixelatorError, PixelatorResult};
pub use strategy::{
    strategies, Options, QuadtreeStrategy, Strategy, DEFAULT_MIN_SIZE, DEFAULT_THRESHOLD,
};

//! Conversion strategies and the static registry
//!
//! A strategy turns a normalized raster into a table document. The set
//! of available strategies is an explicit, ordered constructor list in
//! [`strategies`]; adding a strategy means adding a line there, and the
//! orchestrator takes the returned list as-is.

use pixelator_core::Raster;
use pixelator_html::{map_tree, Table};
use pixelator_quadtree::Quadtree;

use crate::error::PixelatorResult;

/// Default minimum block size for the quadtree strategy
pub const DEFAULT_MIN_SIZE: u32 = 8;

/// Default variance threshold for the quadtree strategy
pub const DEFAULT_THRESHOLD: i32 = 30;

/// An image-to-table conversion strategy
pub trait Strategy {
    /// Human-readable strategy name, used for document section
    /// headings.
    fn name(&self) -> &str;

    /// Convert a raster into a table document.
    fn generate_table(&self, raster: &Raster) -> PixelatorResult<Table>;
}

/// Tunable parameters shared by the registry
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum block size (smallest half-dimension that may still
    /// split)
    pub min_size: u32,
    /// Variance threshold (per channel; larger is coarser)
    pub threshold: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Adaptive quadtree decomposition strategy
#[derive(Debug, Clone)]
pub struct QuadtreeStrategy {
    min_size: u32,
    threshold: i32,
}

impl QuadtreeStrategy {
    /// Create a strategy with explicit parameters.
    pub fn new(min_size: u32, threshold: i32) -> Self {
        Self {
            min_size,
            threshold,
        }
    }
}

impl Default for QuadtreeStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SIZE, DEFAULT_THRESHOLD)
    }
}

impl Strategy for QuadtreeStrategy {
    fn name(&self) -> &str {
        "Quadtree"
    }

    fn generate_table(&self, raster: &Raster) -> PixelatorResult<Table> {
        let tree = Quadtree::new(raster, self.min_size, self.threshold)?;
        Ok(map_tree(&tree)?)
    }
}

/// Build the ordered list of registered strategies.
pub fn strategies(options: &Options) -> Vec<Box<dyn Strategy>> {
    vec![Box::new(QuadtreeStrategy::new(
        options.min_size,
        options.threshold,
    ))]
}

//! pixelator-quadtree - Adaptive quadtree decomposition
//!
//! This crate builds a quadtree over a [`pixelator_core::Raster`]:
//! starting from the whole image, each region is split into four
//! floor-halved quadrants while its color variance stays above a
//! threshold, and collapsed to its mean color once it is homogeneous
//! or too small to split further.
//!
//! # Overview
//!
//! - [`Quadtree::new`] runs the decomposition and owns the result
//! - [`Node`] is a two-variant sum type: a leaf carrying an averaged
//!   color, or an internal node carrying exactly four children in
//!   NW, NE, SW, SE order
//! - [`Quadtree::sample`] descends to the leaf color covering a point
//! - [`Quadtree::node_count`] reports the tree size for diagnostics
//!
//! # Examples
//!
//! ```
//! use pixelator_core::{Raster, Rgb};
//! use pixelator_quadtree::Quadtree;
//!
//! // Two-tone image: the boundary region splits, uniform areas stop.
//! let raster = Raster::from_fn(16, 16, |x, _| {
//!     if x < 8 { Rgb::new(0, 0, 0) } else { Rgb::new(255, 255, 255) }
//! }).unwrap();
//!
//! let tree = Quadtree::new(&raster, 4, 0).unwrap();
//! assert!(tree.node_count() > 1);
//! ```

pub mod error;
pub mod node;
pub mod tree;

pub use error::{QuadtreeError, QuadtreeResult};
pub use node::{split_required, Children, Node, NodeKind};
pub use tree::Quadtree;

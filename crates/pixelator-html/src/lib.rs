//! pixelator-html - Table document model and HTML rendering
//!
//! This crate turns a finished quadtree decomposition into markup in
//! two independent steps:
//!
//! - **Mapping** ([`map_tree`]) - a pure structural transform from
//!   quadtree nodes to an isomorphic document of tables, rows, and
//!   cells
//! - **Rendering** ([`HtmlBuilder`]) - a visitor over the document
//!   that serializes nested HTML tables, diffing background colors
//!   against the innermost active one
//!
//! # Examples
//!
//! ```
//! use pixelator_core::{Raster, Rgb};
//! use pixelator_quadtree::Quadtree;
//! use pixelator_html::{map_tree, HtmlBuilder};
//!
//! let raster = Raster::from_fn(16, 16, |_, _| Rgb::new(0, 128, 0)).unwrap();
//! let tree = Quadtree::new(&raster, 8, 30).unwrap();
//!
//! let table = map_tree(&tree).unwrap();
//! let mut builder = HtmlBuilder::new();
//! table.accept(&mut builder);
//! assert!(builder.html().starts_with("<table"));
//! ```

pub mod builder;
pub mod error;
pub mod map;
pub mod table;

pub use builder::HtmlBuilder;
pub use error::{TableError, TableResult};
pub use map::{map_node, map_tree};
pub use table::{Cell, ElementVisitor, Row, Table};

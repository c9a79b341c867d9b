//! Quadtree - container for one image decomposition
//!
//! A `Quadtree` owns the root [`Node`] of a finished decomposition
//! together with the parameters it was built with. It is constructed
//! once from a raster and read-only afterwards.

use pixelator_core::{Error, Raster, Region, Rgb};

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::node::{self, Node};

/// An adaptive quadtree decomposition of a raster
///
/// # Examples
///
/// ```
/// use pixelator_core::{Raster, Rgb};
/// use pixelator_quadtree::Quadtree;
///
/// // A uniform image collapses to a single leaf.
/// let raster = Raster::from_fn(16, 16, |_, _| Rgb::new(9, 9, 9)).unwrap();
/// let tree = Quadtree::new(&raster, 8, 30).unwrap();
/// assert_eq!(tree.node_count(), 1);
/// assert_eq!(tree.sample(3, 12).unwrap(), Rgb::new(9, 9, 9));
/// ```
#[derive(Debug, Clone)]
pub struct Quadtree {
    root: Node,
    min_size: u32,
    threshold: i32,
}

impl Quadtree {
    /// Build the decomposition of an entire raster.
    ///
    /// `min_size` is the smallest half-dimension a region may have and
    /// still split; `threshold` is the per-channel homogeneity bound
    /// (see [`crate::node`] for the exact predicate).
    ///
    /// # Errors
    ///
    /// Returns [`QuadtreeError::InvalidParameter`] if `min_size < 1`.
    pub fn new(raster: &Raster, min_size: u32, threshold: i32) -> QuadtreeResult<Self> {
        if min_size < 1 {
            return Err(QuadtreeError::InvalidParameter(format!(
                "minimum block size must be >= 1, got {}",
                min_size
            )));
        }

        let region = Region::new(0, 0, raster.width(), raster.height())?;
        let root = node::build(raster, region, min_size, threshold)?;

        Ok(Self {
            root,
            min_size,
            threshold,
        })
    }

    /// Get the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Get the minimum block size the tree was built with.
    #[inline]
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Get the variance threshold the tree was built with.
    #[inline]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Count all nodes in the tree (1 for a single leaf).
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Get the decomposed color at a pixel position.
    ///
    /// Descends the tree by comparing against each region's midlines
    /// until a leaf is reached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] (wrapped as
    /// [`QuadtreeError::Core`]) if the point lies outside the image
    /// extent.
    pub fn sample(&self, x: u32, y: u32) -> QuadtreeResult<Rgb> {
        if !self.root.region().contains_point(x, y) {
            return Err(Error::OutOfBounds { x, y }.into());
        }
        Ok(self.root.color_at(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn test_invalid_min_size() {
        let raster = Raster::from_fn(4, 4, |_, _| Rgb::default()).unwrap();
        assert!(matches!(
            Quadtree::new(&raster, 0, 30),
            Err(QuadtreeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_single_pixel_image() {
        // 1/2 = 0 < min_size for any valid min_size, so the root is a
        // leaf holding the pixel's own color.
        let raster = Raster::from_fn(1, 1, |_, _| Rgb::new(12, 34, 56)).unwrap();
        let tree = Quadtree::new(&raster, 1, 0).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.sample(0, 0).unwrap(), Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let raster = Raster::from_fn(8, 8, |_, _| Rgb::default()).unwrap();
        let tree = Quadtree::new(&raster, 1, 30).unwrap();
        assert!(matches!(
            tree.sample(8, 0),
            Err(QuadtreeError::Core(Error::OutOfBounds { x: 8, y: 0 }))
        ));
        assert!(tree.sample(7, 7).is_ok());
    }

    #[test]
    fn test_sample_follows_split_boundaries() {
        // Left half dark, right half light, split allowed down to 4x4.
        let raster = Raster::from_fn(16, 16, |x, _| {
            if x < 8 {
                Rgb::new(10, 10, 10)
            } else {
                Rgb::new(240, 240, 240)
            }
        })
        .unwrap();
        let tree = Quadtree::new(&raster, 4, 10).unwrap();
        assert_eq!(tree.sample(0, 0).unwrap(), Rgb::new(10, 10, 10));
        assert_eq!(tree.sample(15, 15).unwrap(), Rgb::new(240, 240, 240));
    }

    #[test]
    fn test_root_kind_accessors() {
        let raster = Raster::from_fn(16, 16, |_, _| Rgb::new(1, 2, 3)).unwrap();
        let tree = Quadtree::new(&raster, 8, 30).unwrap();
        assert!(tree.root().is_leaf());
        assert!(tree.root().children().is_none());
        assert!(matches!(tree.root().kind(), NodeKind::Leaf { .. }));
        assert_eq!(tree.min_size(), 8);
        assert_eq!(tree.threshold(), 30);
    }
}

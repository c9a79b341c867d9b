//! Quadtree nodes and the recursive builder
//!
//! A node records the outcome of decomposing one region: either the
//! region was homogeneous enough (or too small) and collapses to a
//! single averaged color, or it splits into four floor-halved child
//! regions.
//!
//! # Child geometry
//!
//! A split computes `new_width = width / 2` and `new_height = height / 2`
//! (integer floor division). The west children start at `x`, the east
//! children at `x + new_width`; north at `y`, south at `y + new_height`.
//! All four children have the same `new_width x new_height` size, so for
//! odd parent dimensions the last row/column of pixels is not covered by
//! any child. That trailing sliver is dropped deliberately at every
//! level; it keeps the four children an exact, gapless tiling of the
//! `2*new_width x 2*new_height` core and the cell sizes of the rendered
//! table consistent.

use pixelator_core::{color_variance, mean_color, Raster, Region, Rgb};

use crate::error::QuadtreeResult;

/// The four children of a split region, in NW, NE, SW, SE order.
///
/// The field order is load-bearing: consumers that group children into
/// rows pair NW with NE and SW with SE.
#[derive(Debug, Clone)]
pub struct Children {
    /// North-west child (left half-width, top half-height)
    pub nw: Node,
    /// North-east child
    pub ne: Node,
    /// South-west child
    pub sw: Node,
    /// South-east child
    pub se: Node,
}

impl Children {
    /// Iterate over the children in NW, NE, SW, SE order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        [&self.nw, &self.ne, &self.sw, &self.se].into_iter()
    }
}

/// What a node's region decomposed into
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Terminal node: the region reduced to one averaged color
    Leaf {
        /// Per-channel mean color over the region
        color: Rgb,
    },
    /// Split node: four child decompositions
    Internal {
        /// Child nodes; boxed to keep the recursive type finite
        children: Box<Children>,
    },
}

/// One node of a quadtree decomposition
///
/// Immutable after construction and exclusively owned by its parent
/// (or by the [`crate::Quadtree`] for the root).
#[derive(Debug, Clone)]
pub struct Node {
    region: Region,
    kind: NodeKind,
}

impl Node {
    /// Get the region this node covers.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Get the node's variant.
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Check whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Get the averaged color, if this node is a leaf.
    pub fn color(&self) -> Option<Rgb> {
        match self.kind {
            NodeKind::Leaf { color } => Some(color),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Get the children, if this node is split.
    pub fn children(&self) -> Option<&Children> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { children } => Some(children),
        }
    }

    /// Count the nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 1,
            NodeKind::Internal { children } => {
                1 + children.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }

    /// Descend to the leaf color covering (x, y).
    ///
    /// Descent compares against the same `x + width / 2` and
    /// `y + height / 2` midlines used to place children, so it always
    /// reaches the leaf whose region was carved out around the point.
    pub(crate) fn color_at(&self, x: u32, y: u32) -> Rgb {
        match &self.kind {
            NodeKind::Leaf { color } => *color,
            NodeKind::Internal { children } => {
                let west = x < self.region.center_x();
                let north = y < self.region.center_y();
                let child = match (north, west) {
                    (true, true) => &children.nw,
                    (true, false) => &children.ne,
                    (false, true) => &children.sw,
                    (false, false) => &children.se,
                };
                child.color_at(x, y)
            }
        }
    }
}

/// Decide whether a region should be split further.
///
/// The two minimum-size checks come first so that small regions never
/// pay for a statistics pass. A negative threshold never splits. The
/// variance bound is `threshold^2 * 3 * area`: the raw variance is a
/// 3-channel sum of squares over `area` pixels, so the per-channel
/// threshold is scaled up by both factors. Equality counts as "split".
///
/// Public so that callers can probe the stopping predicate directly;
/// every leaf of a finished tree fails this predicate for the
/// parameters the tree was built with.
pub fn split_required(raster: &Raster, region: &Region, min_size: u32, threshold: i32) -> bool {
    if region.width / 2 < min_size {
        return false;
    }
    if region.height / 2 < min_size {
        return false;
    }
    if threshold < 0 {
        return false;
    }

    let mean = mean_color(raster, region);
    let variance = color_variance(raster, region, mean);
    let bound = threshold as f64 * threshold as f64 * 3.0 * region.area() as f64;
    variance >= bound
}

/// Recursively build the decomposition of `region`.
pub(crate) fn build(
    raster: &Raster,
    region: Region,
    min_size: u32,
    threshold: i32,
) -> QuadtreeResult<Node> {
    if !split_required(raster, &region, min_size, threshold) {
        let color = mean_color(raster, &region);
        return Ok(Node {
            region,
            kind: NodeKind::Leaf { color },
        });
    }

    let new_width = region.width / 2;
    let new_height = region.height / 2;

    let nw = build(
        raster,
        Region::new(region.x, region.y, new_width, new_height)?,
        min_size,
        threshold,
    )?;
    let ne = build(
        raster,
        Region::new(region.x + new_width, region.y, new_width, new_height)?,
        min_size,
        threshold,
    )?;
    let sw = build(
        raster,
        Region::new(region.x, region.y + new_height, new_width, new_height)?,
        min_size,
        threshold,
    )?;
    let se = build(
        raster,
        Region::new(
            region.x + new_width,
            region.y + new_height,
            new_width,
            new_height,
        )?,
        min_size,
        threshold,
    )?;

    Ok(Node {
        region,
        kind: NodeKind::Internal {
            children: Box::new(Children { nw, ne, sw, se }),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, color: Rgb) -> Raster {
        Raster::from_fn(width, height, |_, _| color).unwrap()
    }

    #[test]
    fn test_min_size_stops_split() {
        // 16/2 = 8 < 9, so even maximal contrast cannot split.
        let raster = Raster::from_fn(16, 16, |x, _| {
            if x < 8 {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(255, 255, 255)
            }
        })
        .unwrap();
        let region = Region::new(0, 0, 16, 16).unwrap();
        assert!(!split_required(&raster, &region, 9, 0));
        assert!(split_required(&raster, &region, 8, 0));
    }

    #[test]
    fn test_zero_variance_splits_at_zero_threshold() {
        // variance == bound == 0, and equality splits.
        let raster = uniform(16, 16, Rgb::new(50, 50, 50));
        let region = Region::new(0, 0, 16, 16).unwrap();
        assert!(split_required(&raster, &region, 1, 0));
        assert!(!split_required(&raster, &region, 1, 1));
    }

    #[test]
    fn test_negative_threshold_never_splits() {
        let raster = Raster::from_fn(16, 16, |x, y| Rgb::new(x as u8 * 16, y as u8 * 16, 0)).unwrap();
        let region = Region::new(0, 0, 16, 16).unwrap();
        assert!(!split_required(&raster, &region, 1, -1));
        assert!(!split_required(&raster, &region, 1, -30));
    }

    #[test]
    fn test_child_geometry_even() {
        let raster = Raster::from_fn(16, 16, |x, _| {
            if x < 8 {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(255, 255, 255)
            }
        })
        .unwrap();
        let region = Region::new(0, 0, 16, 16).unwrap();
        let node = build(&raster, region, 4, 0).unwrap();
        let children = node.children().expect("root must split");
        assert_eq!(*children.nw.region(), Region::new(0, 0, 8, 8).unwrap());
        assert_eq!(*children.ne.region(), Region::new(8, 0, 8, 8).unwrap());
        assert_eq!(*children.sw.region(), Region::new(0, 8, 8, 8).unwrap());
        assert_eq!(*children.se.region(), Region::new(8, 8, 8, 8).unwrap());
    }

    #[test]
    fn test_child_geometry_odd_drops_sliver() {
        // 9/2 = 4: children cover [0,8) x [0,8); column 8 and row 8 are
        // not represented below the root.
        let raster = Raster::from_fn(9, 9, |x, y| Rgb::new((x * 28) as u8, (y * 28) as u8, 0)).unwrap();
        let region = Region::new(0, 0, 9, 9).unwrap();
        let node = build(&raster, region, 1, 0).unwrap();
        let children = node.children().expect("root must split");
        assert_eq!(*children.se.region(), Region::new(4, 4, 4, 4).unwrap());
        for child in children.iter() {
            assert_eq!(child.region().width, 4);
            assert_eq!(child.region().height, 4);
        }
    }

    #[test]
    fn test_leaf_color_is_region_mean() {
        let raster = Raster::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(255, 255, 255)
            }
        })
        .unwrap();
        // Threshold large enough that the root never splits.
        let region = Region::new(0, 0, 4, 4).unwrap();
        let node = build(&raster, region, 1, 10000).unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.color(), Some(Rgb::new(127, 127, 127)));
    }
}

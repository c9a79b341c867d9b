//! Mapping a quadtree onto the table document model
//!
//! A pure structural transform with no image access: every quadtree
//! node becomes exactly one cell. A leaf becomes a block cell sized to
//! its region and filled with its averaged color; a split node becomes
//! a cell wrapping a nested 2x2 table with NW and NE in the first row,
//! SW and SE in the second. The top-level entry point wraps the root
//! cell in a single row and table so callers always receive a
//! [`Table`], whether the decomposition produced one leaf or a deep
//! tree.

use pixelator_quadtree::{Node, NodeKind, Quadtree};

use crate::error::TableResult;
use crate::table::{Cell, Row, Table};

/// Map one quadtree node to a cell.
///
/// # Errors
///
/// Propagates cell construction errors; these cannot occur for nodes
/// produced by a quadtree build, whose regions are always at least
/// 1x1.
pub fn map_node(node: &Node) -> TableResult<Cell> {
    match node.kind() {
        NodeKind::Leaf { color } => {
            Cell::block(*color, node.region().width, node.region().height)
        }
        NodeKind::Internal { children } => {
            let mut top = Row::new();
            top.push(map_node(&children.nw)?);
            top.push(map_node(&children.ne)?);

            let mut bottom = Row::new();
            bottom.push(map_node(&children.sw)?);
            bottom.push(map_node(&children.se)?);

            let mut table = Table::new();
            table.push_row(top);
            table.push_row(bottom);
            Ok(Cell::nested(table))
        }
    }
}

/// Map a whole quadtree to a table document.
///
/// # Errors
///
/// Propagates cell construction errors from [`map_node`].
pub fn map_tree(tree: &Quadtree) -> TableResult<Table> {
    let mut row = Row::new();
    row.push(map_node(tree.root())?);

    let mut table = Table::new();
    table.push_row(row);
    Ok(table)
}

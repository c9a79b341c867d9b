//! Nested-table document model
//!
//! The renderer-agnostic output of the pipeline: an ordered tree of
//! tables, rows, and cells. A cell either carries explicit pixel
//! dimensions and a color (a rendered image block) or wraps a nested
//! table (a subdivided block).
//!
//! Background colors are optional everywhere. An unset background
//! inherits whatever is active at that point in the document, which is
//! what lets a renderer skip re-emitting a color that is already in
//! effect.
//!
//! Consumers walk the model through [`ElementVisitor`]; the `accept`
//! methods only dispatch, so each visitor decides how to recurse.

use pixelator_core::Rgb;

use crate::error::{TableError, TableResult};

/// Visitor over table document elements
///
/// A visitor receiving a cell with a nested child table is expected to
/// recurse into it (via [`Table::accept`]) before treating the cell as
/// closed.
pub trait ElementVisitor {
    /// Visit a table element.
    fn visit_table(&mut self, table: &Table);
    /// Visit a row element.
    fn visit_row(&mut self, row: &Row);
    /// Visit a cell element.
    fn visit_cell(&mut self, cell: &Cell);
}

/// A table cell
///
/// Either a sized, colored block (leaf) or a wrapper around a nested
/// [`Table`]. Pixel dimensions and column spans are validated to be at
/// least 1 at construction.
#[derive(Debug, Clone)]
pub struct Cell {
    background: Option<Rgb>,
    width: Option<u32>,
    height: Option<u32>,
    colspan: u32,
    child: Option<Table>,
}

impl Cell {
    /// Create a colored block cell with explicit pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCellSize`] if either dimension is
    /// zero.
    pub fn block(background: Rgb, width: u32, height: u32) -> TableResult<Self> {
        if width == 0 || height == 0 {
            return Err(TableError::InvalidCellSize { width, height });
        }
        Ok(Self {
            background: Some(background),
            width: Some(width),
            height: Some(height),
            colspan: 1,
            child: None,
        })
    }

    /// Create a cell wrapping a nested table.
    ///
    /// The cell carries no explicit dimensions; they are implied by the
    /// nested content.
    pub fn nested(child: Table) -> Self {
        Self {
            background: None,
            width: None,
            height: None,
            colspan: 1,
            child: Some(child),
        }
    }

    /// Set the column span.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidColspan`] if `colspan` is zero.
    pub fn set_colspan(&mut self, colspan: u32) -> TableResult<()> {
        if colspan == 0 {
            return Err(TableError::InvalidColspan(colspan));
        }
        self.colspan = colspan;
        Ok(())
    }

    /// Get the background color, if set.
    #[inline]
    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    /// Get the explicit pixel width, if set.
    #[inline]
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Get the explicit pixel height, if set.
    #[inline]
    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Get the column span.
    #[inline]
    pub fn colspan(&self) -> u32 {
        self.colspan
    }

    /// Get the nested table, if any.
    #[inline]
    pub fn child(&self) -> Option<&Table> {
        self.child.as_ref()
    }

    /// Dispatch this cell to a visitor.
    pub fn accept(&self, visitor: &mut dyn ElementVisitor) {
        visitor.visit_cell(self);
    }
}

/// A table row: an ordered sequence of cells
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the cells in order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Dispatch this row to a visitor.
    pub fn accept(&self, visitor: &mut dyn ElementVisitor) {
        visitor.visit_row(self);
    }
}

/// A table: an ordered sequence of rows with an optional background
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    background: Option<Rgb>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Set the table background color.
    pub fn set_background(&mut self, background: Option<Rgb>) {
        self.background = background;
    }

    /// Get the table background color, if set.
    #[inline]
    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    /// Get the rows in order.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Count all cells in this table and every nested table.
    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells().iter())
            .map(|cell| {
                1 + cell
                    .child()
                    .map(Table::cell_count)
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Dispatch this table to a visitor.
    pub fn accept(&self, visitor: &mut dyn ElementVisitor) {
        visitor.visit_table(self);
    }
}

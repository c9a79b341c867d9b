//! HTML serialization of the table document
//!
//! `HtmlBuilder` walks a table tree through the [`ElementVisitor`]
//! contract and appends markup to an internal string. The one piece of
//! state it keeps is the innermost active background color: an
//! element whose color already matches the active background emits no
//! `bgcolor` attribute, and each element restores the previous active
//! color when it closes. On deep decompositions this collapses the
//! bulk of the color attributes.

use pixelator_core::Rgb;

use crate::table::{Cell, ElementVisitor, Row, Table};

fn hex_color(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Visitor that renders a table document to HTML markup
///
/// # Examples
///
/// ```
/// use pixelator_core::Rgb;
/// use pixelator_html::{Cell, HtmlBuilder, Row, Table};
///
/// let mut table = Table::new();
/// let mut row = Row::new();
/// row.push(Cell::block(Rgb::new(255, 0, 0), 4, 4).unwrap());
/// table.push_row(row);
///
/// let mut builder = HtmlBuilder::new();
/// table.accept(&mut builder);
/// assert_eq!(
///     builder.html(),
///     "<table cellpadding=0 cellspacing=0><tr>\
///      <td bgcolor=#ff0000 width=4 height=4></td></tr></table>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    html: String,
    current_background: Option<Rgb>,
}

impl HtmlBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the markup produced so far.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the builder, returning the markup.
    pub fn into_html(self) -> String {
        self.html
    }

    /// Emit a `bgcolor` attribute if `background` differs from the
    /// active color, and make it the active color.
    fn apply_background(&mut self, background: Option<Rgb>) {
        if let Some(color) = background {
            if self.current_background != Some(color) {
                self.html.push_str(&format!(" bgcolor={}", hex_color(color)));
                self.current_background = Some(color);
            }
        }
    }
}

impl ElementVisitor for HtmlBuilder {
    fn visit_table(&mut self, table: &Table) {
        let original = self.current_background;

        self.html.push_str("<table cellpadding=0 cellspacing=0");
        self.apply_background(table.background());
        self.html.push('>');

        for row in table.rows() {
            row.accept(self);
        }

        self.html.push_str("</table>");
        self.current_background = original;
    }

    fn visit_row(&mut self, row: &Row) {
        self.html.push_str("<tr>");
        for cell in row.cells() {
            cell.accept(self);
        }
        self.html.push_str("</tr>");
    }

    fn visit_cell(&mut self, cell: &Cell) {
        let original = self.current_background;

        self.html.push_str("<td");
        self.apply_background(cell.background());

        // Explicit dimensions only appear on block cells; nested cells
        // take their size from their content.
        if cell.child().is_none() {
            if let (Some(width), Some(height)) = (cell.width(), cell.height()) {
                self.html
                    .push_str(&format!(" width={} height={}", width, height));
            }
        }

        if cell.colspan() > 1 {
            self.html.push_str(&format!(" colspan={}", cell.colspan()));
        }

        self.html.push('>');

        if let Some(child) = cell.child() {
            child.accept(self);
        }

        self.html.push_str("</td>");
        self.current_background = original;
    }
}

//! Output document assembly
//!
//! Combines per-strategy table markup into one HTML document: a
//! heading per input image, then for each strategy a sub-heading, the
//! rendered table's byte count, and the table itself.

use pixelator_core::Raster;
use pixelator_html::HtmlBuilder;

use crate::error::PixelatorResult;
use crate::strategy::Strategy;

/// Render one strategy's table for a raster to markup.
pub fn render_strategy(raster: &Raster, strategy: &dyn Strategy) -> PixelatorResult<String> {
    let table = strategy.generate_table(raster)?;
    let mut builder = HtmlBuilder::new();
    table.accept(&mut builder);
    Ok(builder.into_html())
}

/// Render the document section for one image: a heading plus every
/// strategy's output.
pub fn render_image_section(
    title: &str,
    raster: &Raster,
    strategies: &[Box<dyn Strategy>],
) -> PixelatorResult<String> {
    let mut section = String::new();
    section.push_str(&format!("<div><h2>{}</h2>", title));

    for strategy in strategies {
        let table = render_strategy(raster, strategy.as_ref())?;
        section.push_str(&format!(
            "<h3>{}</h3><p>{} bytes</p><div>{}</div>",
            strategy.name(),
            table.len(),
            table
        ));
    }

    section.push_str("</div>");
    Ok(section)
}

/// Wrap rendered sections into a complete HTML document.
pub fn document_shell(sections: &str) -> String {
    format!("<html><body>{}</body></html>", sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{strategies, Options};
    use pixelator_core::Rgb;

    #[test]
    fn test_section_contains_strategy_output() {
        let raster = Raster::from_fn(8, 8, |_, _| Rgb::new(0, 0, 0)).unwrap();
        let list = strategies(&Options::default());
        let section = render_image_section("img.png", &raster, &list).unwrap();

        assert!(section.starts_with("<div><h2>img.png</h2>"));
        assert!(section.contains("<h3>Quadtree</h3>"));
        assert!(section.contains(" bytes</p>"));
        assert!(section.contains("<table cellpadding=0 cellspacing=0>"));
        assert!(section.ends_with("</div>"));
    }

    #[test]
    fn test_document_shell() {
        assert_eq!(
            document_shell("<p>x</p>"),
            "<html><body><p>x</p></body></html>"
        );
    }
}

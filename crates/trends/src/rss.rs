//! RSS / Atom title extraction.

use roxmltree::{Document, Node};

use crate::error::TrendError;

/// Titles of every `<item>` (RSS) or `<entry>` (Atom) in the document, in
/// document order. Items without a non-blank title are skipped.
pub fn parse_rss_titles(xml: &str) -> Result<Vec<String>, TrendError> {
    let doc = Document::parse(xml).map_err(|e| TrendError::Parse(e.to_string()))?;

    let titles = doc
        .descendants()
        .filter(|node| node.has_tag_name("item") || node.has_tag_name("entry"))
        .filter_map(|node| child_title(&node))
        .collect();

    Ok(titles)
}

fn child_title(node: &Node<'_, '_>) -> Option<String> {
    node.children()
        .filter(|child| child.is_element() && child.tag_name().name() == "title")
        .find_map(|child| {
            let text = child.text()?.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
}

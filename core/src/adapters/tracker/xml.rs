//! XML wire parser
//!
//! Converts a tracker API response body into the owned [`Node`] tree.

use crate::domain::document::Node;
use crate::error::TrackerError;

/// Parse a response body into a document whose children are the top-level elements
pub fn parse_document(body: &str) -> Result<Node, TrackerError> {
    let doc = roxmltree::Document::parse(body)?;
    Ok(Node::document(vec![convert(doc.root_element())]))
}

fn convert(element: roxmltree::Node<'_, '_>) -> Node {
    let text = element
        .first_child()
        .filter(|c| c.is_text())
        .and_then(|c| c.text())
        .filter(|t| !t.is_empty())
        .map(str::to_owned);

    Node {
        name: element.tag_name().name().to_string(),
        text,
        children: element
            .children()
            .filter(|c| c.is_element())
            .map(convert)
            .collect(),
    }
}

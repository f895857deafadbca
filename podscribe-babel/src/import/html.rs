//! HTML import (HTML → DocumentNode)
//!
//! Pipeline: HTML string → html5ever → RcDom → DocumentNode
//!
//! html5ever always produces a document, recovering from any markup error the way browsers do,
//! so this import cannot fail. The RcDom document node becomes an element tagged
//! [DOCUMENT_TAG] holding the `<html>` element; comments, doctypes and processing instructions are
//! dropped. Element and attribute names are the local (lowercase) names.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use podscribe::{DocumentNode, Element};
use tracing::trace;

/// Tag given to the element standing in for the document itself
pub const DOCUMENT_TAG: &str = "#document";

/// Parse an HTML page into a DocumentNode tree
pub fn parse_html(source: &str) -> DocumentNode {
    let dom = parse_document(RcDom::default(), Default::default()).one(source);
    let tree = convert(&dom.document).unwrap_or_else(|| Element::new(DOCUMENT_TAG).into());
    trace!(nodes = tree.descendants().count(), "parsed html page");
    tree
}

fn convert(handle: &Handle) -> Option<DocumentNode> {
    match &handle.data {
        NodeData::Document => Some(
            Element::new(DOCUMENT_TAG)
                .with_children(convert_children(handle))
                .into(),
        ),
        NodeData::Element { name, attrs, .. } => {
            let mut element = Element::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                element
                    .attributes
                    .insert(attr.name.local.to_string(), attr.value.to_string());
            }
            element.children = convert_children(handle);
            Some(element.into())
        }
        NodeData::Text { contents } => Some(DocumentNode::Text(contents.borrow().to_string())),
        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}

fn convert_children(handle: &Handle) -> Vec<DocumentNode> {
    handle.children.borrow().iter().filter_map(convert).collect()
}

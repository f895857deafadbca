//! Document node tree
//!
//!     The extractor never touches a live DOM. Whatever produced the page (an HTML parser, a JSON
//!     snapshot sent over from a browser, a test builder) hands over a tree of [DocumentNode]s and
//!     the rest of the crate reads it. Only two kinds of node matter for transcripts: text and
//!     elements. Comments, doctypes and the like are dropped by the importers.
//!
//!     The queries here mirror the handful of DOM calls the extractor needs:
//!
//!     | DOM                      | DocumentNode                 |
//!     |--------------------------|------------------------------|
//!     | `textContent`            | [DocumentNode::text_content] |
//!     | `getAttribute(name)`     | [DocumentNode::attribute]    |
//!     | `querySelector(.c)`      | [DocumentNode::find_first_by_class] |
//!     | `querySelectorAll(.c)`   | [DocumentNode::find_all_by_class]   |
//!
//!     Selector queries only look at descendants, never at the node itself, and return matches in
//!     pre-order (document order).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a page snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentNode {
    Text(String),
    Element(Element),
}

/// An element node: tag name, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attribute("class", class)
    }

    pub fn with_child(mut self, child: impl Into<DocumentNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<DocumentNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Tag comparison is ASCII case-insensitive, as HTML tag names are.
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attributes
            .get("class")
            .map(|value| value.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for DocumentNode {
    fn from(element: Element) -> Self {
        DocumentNode::Element(element)
    }
}

impl From<&str> for DocumentNode {
    fn from(text: &str) -> Self {
        DocumentNode::Text(text.to_string())
    }
}

impl From<String> for DocumentNode {
    fn from(text: String) -> Self {
        DocumentNode::Text(text)
    }
}

impl DocumentNode {
    pub fn text(content: impl Into<String>) -> Self {
        DocumentNode::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            DocumentNode::Element(element) => Some(element),
            DocumentNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[DocumentNode] {
        match self {
            DocumentNode::Element(element) => &element.children,
            DocumentNode::Text(_) => &[],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.as_element()
            .and_then(|element| element.attributes.get(name))
            .map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.as_element()
            .map(|element| element.has_class(class))
            .unwrap_or(false)
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.as_element()
            .map(|element| element.is_tag(tag))
            .unwrap_or(false)
    }

    /// Concatenation of every descendant text node, like DOM `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            DocumentNode::Text(content) => out.push_str(content),
            DocumentNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Pre-order iterator over all descendants (the node itself excluded).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children().iter().rev().collect(),
        }
    }

    pub fn find_first_by_class(&self, class: &str) -> Option<&DocumentNode> {
        self.descendants().find(|node| node.has_class(class))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&DocumentNode> {
        self.descendants().filter(|node| node.has_class(class)).collect()
    }

    /// First `tag` element in document order that sits inside an element carrying `class`,
    /// both below this node. Equivalent to `querySelector(".class tag")` scoped to this node.
    pub fn find_first_tag_within_class(&self, class: &str, tag: &str) -> Option<&DocumentNode> {
        fn walk<'a>(
            node: &'a DocumentNode,
            class: &str,
            tag: &str,
            inside: bool,
        ) -> Option<&'a DocumentNode> {
            for child in node.children() {
                if inside && child.is_tag(tag) {
                    return Some(child);
                }
                let inside_child = inside || child.has_class(class);
                if let Some(found) = walk(child, class, tag, inside_child) {
                    return Some(found);
                }
            }
            None
        }
        walk(self, class, tag, false)
    }
}

/// Iterator returned by [DocumentNode::descendants]
pub struct Descendants<'a> {
    stack: Vec<&'a DocumentNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DocumentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

//! Node rendering
//!
//!     A single recursive fold turns a paragraph subtree into a string. The two modes differ only
//!     in how hyperlinks come out:
//!
//!     | Node            | Markdown       | Plain         |
//!     |-----------------|----------------|---------------|
//!     | text            | verbatim       | verbatim      |
//!     | `<br>`          | `\n`           | `\n`          |
//!     | `<a href=u>t</a>` | `[t](u)`     | `t (u)`       |
//!     | `<a>t</a>`      | `t`            | `t`           |
//!     | other element   | children, concatenated        ||
//!
//!     Anchor text is the trimmed text content of the anchor, so markup nested inside a link is
//!     flattened.

use super::node::{DocumentNode, Element};
use super::normalize::trim_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How hyperlinks are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Markdown,
    Plain,
}

impl RenderMode {
    pub const ALL: [RenderMode; 2] = [RenderMode::Markdown, RenderMode::Plain];

    fn anchor(self, text: &str, href: &str) -> String {
        if href.is_empty() {
            return text.to_string();
        }
        match self {
            RenderMode::Markdown => format!("[{}]({})", text, href),
            RenderMode::Plain => format!("{} ({})", text, href),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Markdown => write!(f, "markdown"),
            RenderMode::Plain => write!(f, "plain"),
        }
    }
}

/// Render a subtree in the given mode
pub fn render(node: &DocumentNode, mode: RenderMode) -> String {
    let mut out = String::new();
    render_into(node, mode, &mut out);
    out
}

fn render_into(node: &DocumentNode, mode: RenderMode, out: &mut String) {
    match node {
        DocumentNode::Text(content) => out.push_str(content),
        DocumentNode::Element(element) => render_element(node, element, mode, out),
    }
}

fn render_element(node: &DocumentNode, element: &Element, mode: RenderMode, out: &mut String) {
    if element.is_tag("br") {
        out.push('\n');
    } else if element.is_tag("a") {
        let text = node.text_content();
        let href = node.attribute("href").unwrap_or("");
        out.push_str(&mode.anchor(trim_blank(&text), href));
    } else {
        for child in &element.children {
            render_into(child, mode, out);
        }
    }
}

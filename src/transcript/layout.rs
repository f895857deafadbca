//! Page layout
//!
//!     The class names that mark up a transcript on an episode page. The defaults are the ones
//!     the Indie Hackers site uses:
//!
//!     ```text
//!     .episode-transcript                         root
//!       .episode-transcript__speaking-turn        one per turn
//!         .episode-transcript__speaker-name       speaker, optional
//!         .episode-transcript__timestamp span     timestamp, optional
//!         .episode-transcript__paragraph          zero or more
//!     ```
//!
//!     A different site revision only needs a different [Layout], never a different extractor.

use super::node::DocumentNode;
use super::normalize::trim_blank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub root_class: String,
    pub turn_class: String,
    pub speaker_class: String,
    pub timestamp_class: String,
    /// Element inside the timestamp container that holds the time itself
    pub timestamp_tag: String,
    pub paragraph_class: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            root_class: "episode-transcript".to_string(),
            turn_class: "episode-transcript__speaking-turn".to_string(),
            speaker_class: "episode-transcript__speaker-name".to_string(),
            timestamp_class: "episode-transcript__timestamp".to_string(),
            timestamp_tag: "span".to_string(),
            paragraph_class: "episode-transcript__paragraph".to_string(),
        }
    }
}

impl Layout {
    /// The transcript root: `tree` itself when it carries the root class, otherwise its first
    /// descendant that does.
    pub fn locate_root<'a>(&self, tree: &'a DocumentNode) -> Option<&'a DocumentNode> {
        if tree.has_class(&self.root_class) {
            return Some(tree);
        }
        tree.find_first_by_class(&self.root_class)
    }

    pub fn turns<'a>(&self, root: &'a DocumentNode) -> Vec<&'a DocumentNode> {
        root.find_all_by_class(&self.turn_class)
    }

    pub fn speaker(&self, turn: &DocumentNode) -> String {
        turn.find_first_by_class(&self.speaker_class)
            .map(|node| trim_blank(&node.text_content()).to_string())
            .unwrap_or_default()
    }

    pub fn timestamp(&self, turn: &DocumentNode) -> String {
        turn.find_first_tag_within_class(&self.timestamp_class, &self.timestamp_tag)
            .map(|node| trim_blank(&node.text_content()).to_string())
            .unwrap_or_default()
    }

    pub fn paragraphs<'a>(&self, turn: &'a DocumentNode) -> Vec<&'a DocumentNode> {
        turn.find_all_by_class(&self.paragraph_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::node::Element;

    #[test]
    fn test_locate_root_accepts_root_itself() {
        let layout = Layout::default();
        let root: DocumentNode = Element::new("div").with_class("episode-transcript").into();
        assert!(layout.locate_root(&root).is_some());
    }

    #[test]
    fn test_locate_root_searches_descendants() {
        let layout = Layout::default();
        let page: DocumentNode = Element::new("body")
            .with_child(Element::new("section").with_class("episode-transcript"))
            .into();
        let root = layout.locate_root(&page).unwrap();
        assert!(root.is_tag("section"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let layout = Layout::default();
        let turn: DocumentNode = Element::new("div")
            .with_class("episode-transcript__speaking-turn")
            .with_child(
                Element::new("div")
                    .with_class("episode-transcript__timestamp")
                    .with_child("00:00:01"),
            )
            .into();
        assert_eq!(layout.speaker(&turn), "");
        // Timestamp text outside the span is not picked up
        assert_eq!(layout.timestamp(&turn), "");
        assert!(layout.paragraphs(&turn).is_empty());
    }
}

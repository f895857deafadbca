//! Builders for episode page trees
//!
//!     Tests across the workspace need realistic pages. Writing [Element] chains by hand for every
//!     case buries what is being tested, so pages are described turn by turn instead:
//!
//!     ```rust-example
//!     let page = EpisodePage::new()
//!         .turn(TurnSpec::new("Courtland Allen").at("00:00:05").paragraph("Welcome."))
//!         .turn(TurnSpec::new("Lynne Tye").at("00:01:23").paragraph("Hi there."))
//!         .build();
//!     ```
//!
//!     The tree follows the default [Layout](super::layout::Layout) markup, wrapped in a `body`
//!     so root lookup is exercised too.

use super::layout::Layout;
use super::node::{DocumentNode, Element};

/// One turn to put on the page
#[derive(Debug, Clone, Default)]
pub struct TurnSpec {
    speaker: Option<String>,
    timestamp: Option<String>,
    paragraphs: Vec<Element>,
}

impl TurnSpec {
    pub fn new(speaker: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker.into()),
            ..Self::default()
        }
    }

    /// A turn container with no speaker-name element at all
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn at(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn paragraph(self, text: impl Into<String>) -> Self {
        let text: String = text.into();
        self.paragraph_with(|p| p.with_child(text))
    }

    /// Add a paragraph whose content is built by `fill`
    pub fn paragraph_with(mut self, fill: impl FnOnce(Element) -> Element) -> Self {
        self.paragraphs.push(fill(Element::new("p")));
        self
    }

    fn into_element(self, layout: &Layout) -> Element {
        let mut turn = Element::new("div").with_class(layout.turn_class.clone());
        if let Some(speaker) = self.speaker {
            turn = turn.with_child(
                Element::new("div")
                    .with_class(layout.speaker_class.clone())
                    .with_child(speaker),
            );
        }
        if let Some(timestamp) = self.timestamp {
            turn = turn.with_child(
                Element::new("div")
                    .with_class(layout.timestamp_class.clone())
                    .with_child(Element::new(layout.timestamp_tag.clone()).with_child(timestamp)),
            );
        }
        for mut paragraph in self.paragraphs {
            paragraph = paragraph.with_class(layout.paragraph_class.clone());
            turn = turn.with_child(paragraph);
        }
        turn
    }
}

/// A page holding a transcript root and its turns
#[derive(Debug, Clone, Default)]
pub struct EpisodePage {
    layout: Layout,
    turns: Vec<TurnSpec>,
}

impl EpisodePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            turns: Vec::new(),
        }
    }

    pub fn turn(mut self, turn: TurnSpec) -> Self {
        self.turns.push(turn);
        self
    }

    pub fn build(self) -> DocumentNode {
        let layout = self.layout;
        let root = Element::new("div")
            .with_class(layout.root_class.clone())
            .with_children(self.turns.into_iter().map(|turn| turn.into_element(&layout)));
        Element::new("body").with_child(root).into()
    }
}

/// A two-turn Courtland Allen / Lynne Tye page
pub fn sample_episode() -> DocumentNode {
    EpisodePage::new()
        .turn(
            TurnSpec::new("Courtland Allen")
                .at("00:00:05")
                .paragraph("Welcome."),
        )
        .turn(TurnSpec::new("Lynne Tye").at("00:01:23").paragraph("Hi there."))
        .build()
}

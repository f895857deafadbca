//! Transcript extraction
//!
//!     Walks the turns under the transcript root, collects speaker, timestamp and paragraphs for
//!     each, picks the guest, and assembles the markdown and plain text documents.
//!
//! Document Shape
//!
//!     ```text
//!     <host> = Host of IndieHackers Podcast
//!     <guest> = Guest
//!
//!     <speaker> <timestamp>
//!
//!     <paragraph>
//!
//!     <paragraph>
//!
//!     <speaker> <timestamp>
//!     ...
//!     ```
//!
//! Irregular Input
//!
//!     Only two things abort extraction: no transcript root, and a root without turns. Everything
//!     else degrades quietly:
//!     - a turn without a speaker is skipped, and does not count for guest detection;
//!     - a missing timestamp is empty, and the header is just the speaker;
//!     - paragraphs that render to nothing are dropped;
//!     - a turn with no paragraphs left is just its header.
//!
//! Guest Detection
//!
//!     The guest is the first retained speaker who is not the host. If every speaker is the host,
//!     the guest is called "Guest".

use super::layout::Layout;
use super::node::DocumentNode;
use super::normalize::normalize;
use super::payload::{ExtractError, Transcript, TranscriptPayload};
use super::render::{render, RenderMode};
use tracing::debug;

/// Role line written after the host name
pub const HOST_ROLE: &str = "Host of IndieHackers Podcast";
/// Role line written after the guest name
pub const GUEST_ROLE: &str = "Guest";
/// Name used when no speaker other than the host appears
pub const DEFAULT_GUEST_NAME: &str = "Guest";

const BLOCK_SEPARATOR: &str = "\n\n";

/// One speaker turn, rendered in both modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakingTurn {
    pub speaker: String,
    pub timestamp: String,
    pub markdown_paragraphs: Vec<String>,
    pub text_paragraphs: Vec<String>,
}

impl SpeakingTurn {
    /// Read a turn container. `None` when the speaker name is missing or blank.
    pub fn from_container(container: &DocumentNode, layout: &Layout) -> Option<Self> {
        let speaker = layout.speaker(container);
        if speaker.is_empty() {
            return None;
        }
        let timestamp = layout.timestamp(container);

        let paragraphs = layout.paragraphs(container);
        let collect = |mode: RenderMode| -> Vec<String> {
            paragraphs
                .iter()
                .map(|p| normalize(&render(p, mode)))
                .filter(|p| !p.is_empty())
                .collect()
        };

        Some(Self {
            markdown_paragraphs: collect(RenderMode::Markdown),
            text_paragraphs: collect(RenderMode::Plain),
            speaker,
            timestamp,
        })
    }

    pub fn header(&self) -> String {
        format!("{} {}", self.speaker, self.timestamp)
            .trim()
            .to_string()
    }

    pub fn paragraphs(&self, mode: RenderMode) -> &[String] {
        match mode {
            RenderMode::Markdown => &self.markdown_paragraphs,
            RenderMode::Plain => &self.text_paragraphs,
        }
    }

    pub fn block(&self, mode: RenderMode) -> String {
        let header = self.header();
        let paragraphs = self.paragraphs(mode);
        if paragraphs.is_empty() {
            header
        } else {
            format!("{}{}{}", header, BLOCK_SEPARATOR, paragraphs.join(BLOCK_SEPARATOR))
        }
    }
}

/// Extract with the default Indie Hackers layout
pub fn extract(tree: &DocumentNode, host_name: &str) -> TranscriptPayload {
    extract_with_layout(tree, host_name, &Layout::default())
}

pub fn extract_with_layout(
    tree: &DocumentNode,
    host_name: &str,
    layout: &Layout,
) -> TranscriptPayload {
    try_extract(tree, host_name, layout).into()
}

/// Extraction with the two abort cases as a `Result`
pub fn try_extract(
    tree: &DocumentNode,
    host_name: &str,
    layout: &Layout,
) -> Result<Transcript, ExtractError> {
    let root = layout.locate_root(tree).ok_or(ExtractError::NotFound)?;

    let containers = layout.turns(root);
    if containers.is_empty() {
        return Err(ExtractError::Empty);
    }

    let mut guest_name: Option<String> = None;
    let mut turns = Vec::with_capacity(containers.len());

    for (index, container) in containers.into_iter().enumerate() {
        let Some(turn) = SpeakingTurn::from_container(container, layout) else {
            debug!(index, "skipping turn without a speaker name");
            continue;
        };
        if guest_name.is_none() && turn.speaker != host_name {
            debug!(guest = %turn.speaker, "detected guest");
            guest_name = Some(turn.speaker.clone());
        }
        turns.push(turn);
    }

    let guest_name = guest_name.unwrap_or_else(|| DEFAULT_GUEST_NAME.to_string());
    let header = header_lines(host_name, &guest_name);
    debug!(turns = turns.len(), "assembled transcript");

    Ok(Transcript {
        markdown: assemble(&header, &turns, RenderMode::Markdown),
        text: assemble(&header, &turns, RenderMode::Plain),
        guest_name,
    })
}

/// The two-line cast list at the top of every document
pub fn header_lines(host_name: &str, guest_name: &str) -> String {
    format!(
        "{} = {}\n{} = {}",
        host_name, HOST_ROLE, guest_name, GUEST_ROLE
    )
}

fn assemble(header: &str, turns: &[SpeakingTurn], mode: RenderMode) -> String {
    let blocks: Vec<String> = turns.iter().map(|turn| turn.block(mode)).collect();
    format!(
        "{}{}{}",
        header,
        BLOCK_SEPARATOR,
        blocks.join(BLOCK_SEPARATOR)
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::testing::{EpisodePage, TurnSpec};

    const HOST: &str = "Courtland Allen";

    #[test]
    fn test_missing_root() {
        let page = DocumentNode::from(crate::transcript::node::Element::new("body"));
        let payload = extract(&page, HOST);
        assert!(payload.is_error());
        assert_eq!(
            payload.error.as_deref(),
            Some("Transcript not found on this page.")
        );
        assert_eq!(payload.markdown, "");
        assert_eq!(payload.text, "");
        assert_eq!(payload.guest_name, "");
    }

    #[test]
    fn test_empty_root() {
        let page = EpisodePage::new().build();
        let payload = extract(&page, HOST);
        assert_eq!(payload.error.as_deref(), Some("Transcript is empty."));
        assert_eq!(payload.markdown, "");
    }

    #[test]
    fn test_guest_is_first_non_host() {
        let page = EpisodePage::new()
            .turn(TurnSpec::new("Host").paragraph("a"))
            .turn(TurnSpec::new("A").paragraph("b"))
            .turn(TurnSpec::new("Host").paragraph("c"))
            .turn(TurnSpec::new("B").paragraph("d"))
            .build();
        let payload = extract(&page, "Host");
        assert!(!payload.is_error());
        assert_eq!(payload.guest_name, "A");
    }

    #[test]
    fn test_only_host_speaks() {
        let page = EpisodePage::new()
            .turn(TurnSpec::new(HOST).paragraph("Solo episode."))
            .build();
        let payload = extract(&page, HOST);
        assert_eq!(payload.guest_name, "Guest");
        assert!(payload
            .markdown
            .starts_with("Courtland Allen = Host of IndieHackers Podcast\nGuest = Guest"));
    }

    #[test]
    fn test_blank_speaker_is_skipped() {
        let page = EpisodePage::new()
            .turn(TurnSpec::new("   ").paragraph("ghost text"))
            .turn(TurnSpec::anonymous().paragraph("more ghost text"))
            .turn(TurnSpec::new(HOST).paragraph("Welcome."))
            .build();
        let payload = extract(&page, HOST);
        assert_eq!(payload.guest_name, "Guest");
        assert!(!payload.markdown.contains("ghost"));
        assert!(!payload.text.contains("ghost"));
    }

    #[test]
    fn test_byte_order_mark_speaker_is_skipped() {
        let page = EpisodePage::new()
            .turn(TurnSpec::new("\u{FEFF}").paragraph("x"))
            .turn(TurnSpec::new("Host").paragraph("y"))
            .build();
        let payload = extract(&page, "Host");
        assert_eq!(payload.guest_name, "Guest");
        assert_eq!(
            payload.markdown,
            "Host = Host of IndieHackers Podcast\nGuest = Guest\n\nHost\n\ny"
        );
        assert!(!payload.text.contains('\u{FEFF}'));
    }

    #[test]
    fn test_turn_without_timestamp_or_paragraphs() {
        let page = EpisodePage::new()
            .turn(TurnSpec::new("Lynne Tye"))
            .build();
        let payload = extract(&page, HOST);
        assert_eq!(
            payload.markdown,
            "Courtland Allen = Host of IndieHackers Podcast\nLynne Tye = Guest\n\nLynne Tye"
        );
    }

    #[test]
    fn test_blank_paragraphs_are_dropped() {
        let page = EpisodePage::new()
            .turn(
                TurnSpec::new("Lynne Tye")
                    .at("00:01:23")
                    .paragraph("  \n\n ")
                    .paragraph("Hi there."),
            )
            .build();
        let payload = extract(&page, HOST);
        assert!(payload
            .text
            .ends_with("Lynne Tye 00:01:23\n\nHi there."));
    }

    #[test]
    fn test_speaking_turn_block() {
        let turn = SpeakingTurn {
            speaker: "A".to_string(),
            timestamp: String::new(),
            markdown_paragraphs: vec!["one".to_string(), "two".to_string()],
            text_paragraphs: vec![],
        };
        assert_eq!(turn.block(RenderMode::Markdown), "A\n\none\n\ntwo");
        assert_eq!(turn.block(RenderMode::Plain), "A");
    }

    #[test]
    fn test_custom_layout() {
        let layout = Layout {
            root_class: "transcript".to_string(),
            turn_class: "turn".to_string(),
            speaker_class: "who".to_string(),
            timestamp_class: "when".to_string(),
            timestamp_tag: "time".to_string(),
            paragraph_class: "said".to_string(),
        };
        let page = EpisodePage::with_layout(layout.clone())
            .turn(TurnSpec::new("Ann").at("01:00").paragraph("Hello"))
            .build();
        assert!(extract(&page, "Bob").is_error());

        let payload = extract_with_layout(&page, "Bob", &layout);
        assert_eq!(
            payload.text,
            "Bob = Host of IndieHackers Podcast\nAnn = Guest\n\nAnn 01:00\n\nHello"
        );
    }
}

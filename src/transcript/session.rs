//! Loading a transcript for presentation
//!
//!     Extraction alone leaves two things to the caller: deciding whether there is anything worth
//!     offering, and cleaning the documents before they are copied or saved. [load] does both, in
//!     the order a front end needs them:
//!
//!     1. refuse pages that are not episode pages (when the address is known);
//!     2. extract;
//!     3. refuse payloads with an error or an empty markdown document;
//!     4. strip image lines from both documents.

use super::episode::looks_like_episode_tab;
use super::extract::extract_with_layout;
use super::filter::strip_image_lines;
use super::layout::Layout;
use super::node::DocumentNode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_FILENAME: &str = "transcript.txt";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Open an Indie Hackers podcast episode tab first.")]
    NotEpisodePage,
    #[error("{0}")]
    Extraction(String),
}

/// Knobs for [load]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub host_name: String,
    pub layout: Layout,
    pub filename: String,
}

impl LoadOptions {
    pub fn new(host_name: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
            layout: Layout::default(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// Cleaned documents ready to copy or save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedTranscript {
    pub markdown: String,
    pub text: String,
    pub guest_name: String,
    pub filename: String,
}

impl LoadedTranscript {
    /// One-line status for the user
    pub fn status(&self) -> String {
        format!("Loaded guest: {}", self.guest_name)
    }
}

pub fn load(
    tree: &DocumentNode,
    url: Option<&str>,
    options: &LoadOptions,
) -> Result<LoadedTranscript, LoadError> {
    if let Some(url) = url {
        if !looks_like_episode_tab(url) {
            debug!(url, "not an episode page");
            return Err(LoadError::NotEpisodePage);
        }
    }

    let payload = extract_with_layout(tree, &options.host_name, &options.layout);
    if let Some(error) = payload.error {
        return Err(LoadError::Extraction(error));
    }
    if payload.markdown.is_empty() {
        return Err(LoadError::Extraction("Transcript not found.".to_string()));
    }

    let loaded = LoadedTranscript {
        markdown: strip_image_lines(&payload.markdown),
        text: strip_image_lines(&payload.text),
        guest_name: payload.guest_name,
        filename: options.filename.clone(),
    };
    info!(guest = %loaded.guest_name, "loaded transcript");
    Ok(loaded)
}

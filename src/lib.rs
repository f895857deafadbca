//! # podscribe
//!
//! Turns an Indie Hackers podcast episode page into two transcripts: a markdown document and a
//! plain text document, grouped by speaker turn.
//!
//! Pipeline
//!
//!     page tree ──render──▶ paragraph strings ──normalize──▶ turns ──assemble──▶ documents
//!                                                                                    │
//!                                                            strip_image_lines ◀─────┘
//!
//!     Every stage is a pure function over owned strings or a borrowed tree, so each can be used
//!     and tested on its own:
//!     - [render](transcript::render::render): node tree to string, markdown or plain links
//!     - [normalize](transcript::normalize::normalize): collapse blank-line runs, trim
//!     - [extract](transcript::extract::extract): turns, guest detection, document assembly
//!     - [strip_image_lines](transcript::filter::strip_image_lines): drop standalone image lines
//!
//!     [session](transcript::session) strings these together the way a front end wants them.
//!
//! Input
//!
//!     This crate does not parse HTML. Pages arrive as [DocumentNode] trees; the podscribe-babel
//!     crate builds them from HTML or JSON. The host name is always passed in by the caller.
//!
//! For test pages, see the [testing module](transcript::testing).

pub mod transcript;

pub use transcript::episode::{extract_episode_info, is_indie_hackers_url, is_podcast_url, EpisodeInfo};
pub use transcript::extract::{extract, extract_with_layout, try_extract, SpeakingTurn};
pub use transcript::filter::strip_image_lines;
pub use transcript::layout::Layout;
pub use transcript::node::{DocumentNode, Element};
pub use transcript::normalize::normalize;
pub use transcript::payload::{ExtractError, Transcript, TranscriptPayload};
pub use transcript::render::{render, RenderMode};
pub use transcript::session::{load, LoadError, LoadOptions, LoadedTranscript};

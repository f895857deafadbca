//! Format implementations
//!
//! The markdown and text formats hand back the matching cleaned document as is; json wraps the
//! whole transcript (both documents, guest and filename) for other tools.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use text::TextFormat;

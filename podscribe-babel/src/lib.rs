//! Page import and transcript output for podscribe
//!
//!     podscribe works on [DocumentNode](podscribe::DocumentNode) trees and produces
//!     [LoadedTranscript](podscribe::LoadedTranscript)s. This crate sits on either side of that:
//!
//!     - import: page source (HTML or a JSON node snapshot) → DocumentNode
//!     - formats: LoadedTranscript → markdown, text or json output
//!
//!     Like the core, this is a pure lib: no printing, no env vars, no file access. The CLI does
//!     all of that.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for output formats
//!     - FormatRegistry: discovery and selection by name or file extension
//!     - import: one adapter per input format, selected through InputFormat
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── json.rs
//!     │   ├── markdown.rs
//!     │   └── text.rs
//!     ├── import
//!     │   ├── html.rs             # html5ever → DocumentNode
//!     │   └── json.rs             # serde → DocumentNode
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     HTML parsing is never hand written: html5ever does the parsing (with all of the browser
//!     error recovery rules) and we only adapt its RcDom into our tree. The adapter keeps text and
//!     elements and drops everything else.

pub mod error;
pub mod format;
pub mod formats;
pub mod import;
pub mod registry;

pub use error::{FormatError, ImportError};
pub use format::Format;
pub use import::{import, InputFormat};
pub use registry::FormatRegistry;

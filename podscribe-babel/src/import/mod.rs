//! Page import
//!
//!     | Input | Adapter        | Notes                                              |
//!     |-------|----------------|----------------------------------------------------|
//!     | html  | [html]         | saved episode page, parsed by html5ever            |
//!     | json  | [json]         | DocumentNode snapshot (serde's external tagging)   |

pub mod html;
pub mod json;

use crate::error::ImportError;
use podscribe::DocumentNode;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Html,
    Json,
}

impl InputFormat {
    /// Guess from a file extension; anything unrecognized is treated as HTML
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case("json") {
            InputFormat::Json
        } else {
            InputFormat::Html
        }
    }
}

impl FromStr for InputFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(InputFormat::Html),
            "json" => Ok(InputFormat::Json),
            other => Err(ImportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Html => write!(f, "html"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

/// Build a page tree from source in the given format
pub fn import(source: &str, format: InputFormat) -> Result<DocumentNode, ImportError> {
    match format {
        InputFormat::Html => Ok(html::parse_html(source)),
        InputFormat::Json => json::parse_json(source),
    }
}

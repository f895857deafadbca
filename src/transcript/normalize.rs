//! Blank-line normalization
//!
//!     Rendering `<br>` runs and whitespace-heavy markup leaves stacks of newlines behind.
//!     Any run of three or more `\n` becomes exactly two (one blank line), then the result is
//!     trimmed. Applying it twice changes nothing.
//!
//!     Trimming treats a byte order mark (U+FEFF) as whitespace, since saved pages carry stray
//!     ones and they must not count as content.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Trim whitespace and byte order marks from both ends
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Collapse runs of three or more newlines into two
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n\n").into_owned()
}

/// Collapse blank-line runs and trim
pub fn normalize(text: &str) -> String {
    trim_blank(&collapse_blank_lines(text)).to_string()
}

//! JSON import (node snapshot → DocumentNode)
//!
//! Accepts the serde form of [DocumentNode]:
//!
//! ```text
//! {"element": {"tag": "div", "attributes": {"class": "episode-transcript"}, "children": [
//!     {"text": "..."}
//! ]}}
//! ```
//!
//! `attributes` and `children` may be omitted.

use crate::error::ImportError;
use podscribe::DocumentNode;

pub fn parse_json(source: &str) -> Result<DocumentNode, ImportError> {
    Ok(serde_json::from_str(source)?)
}

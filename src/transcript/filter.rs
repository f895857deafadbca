//! Post-processing of finished documents
//!
//!     Episode pages embed images inside transcript paragraphs. Rendered, they show up as lines
//!     of the form `![](...)`. Those lines are dropped from both the markdown and the plain text
//!     document so the two outputs stay in step.
//!
//!     Only whole lines are removed: an image marker in the middle of a sentence is left alone.

use super::normalize::{normalize, trim_blank};

const IMAGE_LINE_MARKER: &str = "![](";

/// Drop standalone image lines, then collapse blank-line runs and trim
pub fn strip_image_lines(document: &str) -> String {
    let kept: Vec<&str> = document
        .split('\n')
        .filter(|line| !trim_blank(line).starts_with(IMAGE_LINE_MARKER))
        .collect();
    normalize(&kept.join("\n"))
}

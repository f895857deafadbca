//! Format trait definition
//!
//! Every output format turns a loaded (already cleaned) transcript into a string.

use crate::error::FormatError;
use podscribe::LoadedTranscript;

/// Trait for transcript output formats
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn serialize(&self, transcript: &LoadedTranscript) -> Result<String, FormatError> {
///         Ok(transcript.text.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "text")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions this format is usually saved with, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn serialize(&self, transcript: &LoadedTranscript) -> Result<String, FormatError>;
}

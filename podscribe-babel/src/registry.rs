//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available output formats.
//! Formats can be registered and retrieved by name or by file extension.

use crate::error::FormatError;
use crate::format::Format;
use podscribe::LoadedTranscript;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let output = registry.serialize(&transcript, "markdown")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Find the format that claims a file extension (case-insensitive, no dot)
    pub fn for_extension(&self, extension: &str) -> Option<&dyn Format> {
        let mut names: Vec<_> = self.formats.keys().collect();
        names.sort();
        names
            .into_iter()
            .filter_map(|name| self.formats.get(name))
            .find(|f| {
                f.file_extensions()
                    .iter()
                    .any(|ext| ext.eq_ignore_ascii_case(extension))
            })
            .map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a transcript using the specified format
    pub fn serialize(
        &self,
        transcript: &LoadedTranscript,
        format: &str,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize(transcript)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::MarkdownFormat);
        registry.register(crate::formats::TextFormat);
        registry.register(crate::formats::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

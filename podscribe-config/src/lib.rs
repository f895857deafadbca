//! Shared configuration loader for podscribe.
//!
//! `defaults/podscribe.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PodscribeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use podscribe::{Layout, LoadOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/podscribe.default.toml");

/// Top-level configuration consumed by podscribe applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PodscribeConfig {
    pub host: HostConfig,
    pub output: OutputConfig,
    pub layout: Layout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub filename: String,
    pub format: String,
}

impl PodscribeConfig {
    /// Options for [podscribe::load] built from this configuration
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new(self.host.name.clone())
            .with_layout(self.layout.clone())
            .with_filename(self.output.filename.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PodscribeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PodscribeConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.host.name, "Courtland Allen");
        assert_eq!(config.output.filename, "transcript.txt");
        assert_eq!(config.output.format, "markdown");
        assert_eq!(config.layout, Layout::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("host.name", "Channing Allen")
            .expect("override to apply")
            .set_override("output.filename", "episode.txt")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.host.name, "Channing Allen");

        let options = config.load_options();
        assert_eq!(options.host_name, "Channing Allen");
        assert_eq!(options.filename, "episode.txt");
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/podscribe.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.host.name, "Courtland Allen");
    }

    #[test]
    fn required_file_must_exist() {
        let result = Loader::new()
            .with_file("/nonexistent/podscribe.toml")
            .build();
        assert!(result.is_err());
    }
}

//! Shared configuration loader for the mdlex toolchain.
//!
//! `defaults/mdlex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdlexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/mdlex.default.toml");

/// Top-level configuration consumed by mdlex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdlexConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// How token streams are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub spans: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
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
    pub fn build(self) -> Result<MdlexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdlexConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, "simple");
        assert!(config.output.spans);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("output.spans", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(!config.output.spans);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[log]\nlevel = \"debug\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.output.format, "simple");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "simple");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("does/not/exist.toml").build();
        assert!(result.is_err());
    }
}

//! Shared configuration loader for the wittgenstein toolchain.
//!
//! `defaults/wit.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WitConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use wit_babel::{ConvertOptions, OutputMode};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/wit.default.toml");

/// File picked up from the working directory when present.
pub const PROJECT_FILE: &str = "wit.toml";

/// Top-level configuration consumed by wittgenstein applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WitConfig {
    pub convert: ConvertConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub mode: String,
    pub collapsed: bool,
    pub structured_extension: String,
    pub plain_extension: String,
}

impl ConvertConfig {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_name(&self.mode)
    }

    /// Extension of files written in `mode`.
    pub fn extension_for(&self, mode: OutputMode) -> &str {
        match mode {
            OutputMode::Structured => &self.structured_extension,
            OutputMode::Plain => &self.plain_extension,
        }
    }
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions::new(config.output_mode()).with_collapsed(config.collapsed)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub extensions: Vec<String>,
}

impl InputConfig {
    /// Whether `path` carries one of the accepted extensions (case-insensitive).
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
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

    /// Apply a single key/value override (CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WitConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WitConfig, ConfigError> {
    Loader::new().build()
}

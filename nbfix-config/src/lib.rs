//! Shared configuration loader for the nbfix tools.
//!
//! `defaults/nbfix.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. The binaries layer, in order:
//!
//! 1. the embedded defaults
//! 2. the file named by `NBFIX_CONFIG`, if the variable is set and the file exists
//! 3. a file passed with `--config` (must exist)
//! 4. single-key overrides from command-line flags
//!
//! and deserialize the result into [`NbfixConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use nbfix_core::WriteOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/nbfix.default.toml");

/// Environment variable naming a per-user configuration file
pub const CONFIG_ENV: &str = "NBFIX_CONFIG";

/// Top-level configuration consumed by nbfix applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NbfixConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// How rewritten notebooks are laid out.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub indent_width: usize,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl From<&OutputConfig> for WriteOptions {
    fn from(output: &OutputConfig) -> Self {
        WriteOptions {
            indent_width: output.indent_width,
            trailing_newline: output.trailing_newline,
        }
    }
}

impl NbfixConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions::from(&self.output)
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

    /// Layer a TOML file that must exist (`--config`).
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Layer a TOML file that is skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    /// Layer the file named by the environment variable `var`, if it is set and non-empty.
    pub fn with_env_file(self, var: &str) -> Self {
        match std::env::var_os(var).filter(|value| !value.is_empty()) {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    /// Override a single dotted key, e.g. `output.indent_width` from `--indent`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    fn layer_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NbfixConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NbfixConfig, ConfigError> {
    Loader::new().build()
}

/// Defaults plus the per-user file from `NBFIX_CONFIG`, if any.
pub fn load_user() -> Result<NbfixConfig, ConfigError> {
    Loader::new().with_env_file(CONFIG_ENV).build()
}

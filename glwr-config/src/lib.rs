//! Shared configuration loader for glwr.
//!
//! `defaults/glwr.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GlwrConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use glwr_babel::{HeaderOptions, Includes};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/glwr.default.toml");

/// Keys of the `[include]` table, in inclusion mask order.
pub const INCLUDE_KEYS: [&str; 11] = [
    "link",
    "brief",
    "version",
    "description",
    "examples",
    "notes",
    "parameters",
    "errors",
    "associated_gets",
    "see_also",
    "copyright",
];

/// Top-level configuration consumed by glwr applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GlwrConfig {
    pub include: IncludeConfig,
    pub output: OutputConfig,
}

/// Which refpage sections end up in the comment blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludeConfig {
    pub link: bool,
    pub brief: bool,
    pub version: bool,
    pub description: bool,
    pub examples: bool,
    pub notes: bool,
    pub parameters: bool,
    pub errors: bool,
    pub associated_gets: bool,
    pub see_also: bool,
    pub copyright: bool,
}

impl From<&IncludeConfig> for Includes {
    fn from(config: &IncludeConfig) -> Self {
        Includes {
            link: config.link,
            brief: config.brief,
            version: config.version,
            description: config.description,
            examples: config.examples,
            notes: config.notes,
            parameters: config.parameters,
            errors: config.errors,
            associated_gets: config.associated_gets,
            see_also: config.see_also,
            copyright: config.copyright,
        }
    }
}

impl From<IncludeConfig> for Includes {
    fn from(config: IncludeConfig) -> Self {
        Includes::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub width: usize,
    pub link_base: String,
    pub verbose: bool,
}

impl From<&GlwrConfig> for HeaderOptions {
    fn from(config: &GlwrConfig) -> Self {
        HeaderOptions {
            includes: Includes::from(&config.include),
            width: config.output.width,
            link_base: config.output.link_base.clone(),
        }
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

    /// Override every `[include]` flag from an inclusion mask.
    pub fn with_includes(self, includes: &Includes) -> Result<Self, ConfigError> {
        let flags = [
            includes.link,
            includes.brief,
            includes.version,
            includes.description,
            includes.examples,
            includes.notes,
            includes.parameters,
            includes.errors,
            includes.associated_gets,
            includes.see_also,
            includes.copyright,
        ];

        INCLUDE_KEYS
            .iter()
            .zip(flags)
            .try_fold(self, |loader, (key, enabled)| {
                loader.set_override(&format!("include.{key}"), enabled)
            })
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GlwrConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GlwrConfig, ConfigError> {
    Loader::new().build()
}

//! Format trait definition
//!
//! This module defines the Format trait every reader and writer implements. The trait provides a
//! uniform interface for parsing refpages and serializing the parsed model.

use crate::error::{RefpageError, Result};
use crate::ir::nodes::Refpage;
use crate::options::{HeaderOptions, Includes};
use std::path::PathBuf;

/// What a parser needs beyond the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    /// Page name, used for diagnostics and as the model name
    pub name: String,
    /// Base directory of relative `xi:include` targets
    pub dir: PathBuf,
    pub includes: Includes,
}

impl ParseContext {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            includes: Includes::default(),
        }
    }

    pub fn with_includes(mut self, includes: Includes) -> Self {
        self.includes = includes;
        self
    }
}

/// Trait for refpage formats
///
/// Formats can support parsing (source → [`Refpage`]), serialization ([`Refpage`] → text), or
/// both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, page: &Refpage, options: &HeaderOptions) -> Result<String> {
///         Ok(page.name.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "docbook", "header", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Refpage)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Refpage → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Refpage
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str, _context: &ParseContext) -> Result<Refpage> {
        Err(RefpageError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Refpage into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _page: &Refpage, _options: &HeaderOptions) -> Result<String> {
        Err(RefpageError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}

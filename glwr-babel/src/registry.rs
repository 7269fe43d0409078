//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::{RefpageError, Result};
use crate::format::{Format, ParseContext};
use crate::ir::nodes::Refpage;
use crate::options::HeaderOptions;
use std::collections::HashMap;

/// Registry of refpage formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let page = registry.parse(source, "docbook", &ParseContext::new("glFinish", "."))?;
/// let header = registry.serialize(&page, "header", &HeaderOptions::default())?;
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
    pub fn get(&self, name: &str) -> Result<&dyn Format> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RefpageError::FormatNotFound(name.to_string()))
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

    /// Names of the formats that can serialize, sorted
    pub fn list_serializers(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .formats
            .values()
            .filter(|format| format.supports_serialization())
            .map(|format| format.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str, context: &ParseContext) -> Result<Refpage> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(RefpageError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source, context)
    }

    /// Serialize a refpage using the specified format
    pub fn serialize(&self, page: &Refpage, format: &str, options: &HeaderOptions) -> Result<String> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(RefpageError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(page, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::docbook::DocbookFormat);
        registry.register(crate::formats::header::HeaderFormat::new(crate::legacy::Gl1));
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::json::DiagnosticsFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

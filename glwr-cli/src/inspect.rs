//! Single-refpage inspection
//!
//! `glwr inspect <file>` parses one refpage exactly like `generate` does and prints one view of
//! the result instead of writing headers:
//!
//! - `json`: the parsed document model, diagnostics included
//! - `diagnostics`: one `@<page> <kind>: <message>` line per anomaly
//! - `header`: the function header `generate` would write for the page
//!
//! The views are the serializers of the default [`FormatRegistry`].

use glwr_babel::{FormatRegistry, HeaderOptions, ParseContext, RefpageError};
use std::fs;
use std::path::Path;

/// Views accepted by `--as`. Mirrored in build.rs for completions.
pub const INSPECT_FORMATS: &[&str] = &["diagnostics", "header", "json"];

pub const DEFAULT_INSPECT_FORMAT: &str = "json";

/// Parse the refpage at `path` and render it with the `format` serializer.
pub fn inspect(path: &Path, format: &str, options: &HeaderOptions) -> Result<String, RefpageError> {
    let source = fs::read_to_string(path).map_err(|source| RefpageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let context = ParseContext::new(name, dir).with_includes(options.includes);

    let registry = FormatRegistry::default();
    let page = registry.parse(&source, "docbook", &context)?;
    registry.serialize(&page, format, options)
}

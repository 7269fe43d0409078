//! Inspection outputs: the parsed model as JSON and the diagnostics list

use crate::error::{RefpageError, Result};
use crate::format::Format;
use crate::ir::nodes::Refpage;
use crate::options::HeaderOptions;
use serde::Serialize;

/// Pretty-printed JSON of the whole model, diagnostics included.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Parsed refpage model as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, page: &Refpage, _options: &HeaderOptions) -> Result<String> {
        to_json(page)
    }
}

/// One `@<page> <kind>: <message>` line per diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticsFormat;

impl Format for DiagnosticsFormat {
    fn name(&self) -> &str {
        "diagnostics"
    }

    fn description(&self) -> &str {
        "Parse diagnostics, one per line"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, page: &Refpage, _options: &HeaderOptions) -> Result<String> {
        let mut out = String::new();
        for diagnostic in page.diagnostics() {
            let kind = serde_json::to_value(diagnostic.kind)
                .map_err(|e| RefpageError::Serialization(e.to_string()))?;
            out.push_str(&format!(
                "@{} {}: {}\n",
                page.name,
                kind.as_str().unwrap_or_default(),
                diagnostic.message
            ));
        }
        Ok(out)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| RefpageError::Serialization(e.to_string()))
}

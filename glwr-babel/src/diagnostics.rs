//! Non-fatal parse diagnostics
//!
//! Every anomaly found while walking a refpage is recorded here and mirrored to the `log`
//! facade as `@<document> <message>`. Nothing recorded here stops the walker.

use serde::Serialize;

/// Classification of a parse anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An element, `xml:id` or attribute value outside the known vocabulary.
    UnknownConstruct,
    /// An expected child is missing, misnamed, or not unique.
    StructuralViolation,
    /// A required attribute is absent.
    MissingAttribute,
    /// A set-once field received a second value; the first one was kept.
    DuplicateValue,
    /// A TeX span that is not in the formula table.
    UnrecognizedFormula,
}

/// A single recorded anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Collects the diagnostics of one document, in source order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    document: String,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            entries: Vec::new(),
        }
    }

    /// The document name every message is prefixed with.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn push(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        log::warn!("@{} {}", self.document, message);
        self.entries.push(Diagnostic { kind, message });
    }

    /// Stores `value` into `slot` unless the slot already holds something.
    ///
    /// An empty slot counts as unset. A collision keeps the first value and is recorded as a
    /// [`DiagnosticKind::DuplicateValue`] naming `field`.
    pub fn set_once(&mut self, field: &str, slot: &mut String, value: impl Into<String>) {
        if slot.is_empty() {
            *slot = value.into();
        } else {
            self.push(
                DiagnosticKind::DuplicateValue,
                format!("Duplicate value: {field}"),
            );
        }
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

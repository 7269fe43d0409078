//! Whitespace normalization and TeX substitution for mixed content

use super::latex;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n\s*").unwrap());

static TEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\$([^$]+)\$\$|\$([^$]+)\$").unwrap());

/// Collapse every source line break, together with the indentation after it, to one space.
pub fn collapse_line_breaks(raw: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(raw, " ")
}

/// Strip leading and trailing spaces. Other whitespace is kept.
pub fn trim_spaces(text: &str) -> &str {
    text.trim_matches(' ')
}

/// Collapse line breaks and trim the result.
pub fn normalize(raw: &str) -> String {
    trim_spaces(&collapse_line_breaks(raw)).to_string()
}

/// Replace `$…$` and `$$…$$` spans with their HTML rendering.
///
/// Unknown formulas are reported and rendered as [`latex::UNRECOGNIZED_FORMULA`].
pub fn replace_formulas(text: &str, diagnostics: &mut Diagnostics) -> String {
    if !text.contains('$') {
        return text.to_string();
    }

    TEX.replace_all(text, |caps: &Captures| {
        let (formula, display) = match (caps.get(1), caps.get(2)) {
            (Some(display), _) => (display.as_str(), true),
            (None, Some(inline)) => (inline.as_str(), false),
            (None, None) => return String::new(),
        };

        latex::render(formula, display).unwrap_or_else(|| {
            diagnostics.push(
                DiagnosticKind::UnrecognizedFormula,
                format!("Unrecognized LaTeX math: {formula}"),
            );
            latex::UNRECOGNIZED_FORMULA.to_string()
        })
    })
    .into_owned()
}

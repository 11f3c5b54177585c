//! Rendering a [`Validation`] for display or saving.

use serde::Serialize;

use crate::diagnostic::{Diagnostic, SUCCESS_MESSAGE, Validation};

/// Shape of the JSON report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    passed: bool,
    summary: String,
    diagnostics: &'a [Diagnostic],
}

/// One message per line, or the success sentinel.
#[must_use]
pub fn render_text(validation: &Validation) -> String {
    match validation {
        Validation::Passed => SUCCESS_MESSAGE.to_string(),
        Validation::Diagnostics(_) => validation.messages().join("\n"),
    }
}

/// A one-line summary such as `3 problems found.`
#[must_use]
pub fn summary(validation: &Validation) -> String {
    match validation.diagnostics().len() {
        0 => SUCCESS_MESSAGE.to_string(),
        1 => "1 problem found.".to_string(),
        n => format!("{n} problems found."),
    }
}

/// Pretty-printed JSON:
/// `{ "passed": bool, "summary": string, "diagnostics": [{ "line", "kind", "message" }] }`.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn render_json(validation: &Validation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        passed: validation.is_passed(),
        summary: summary(validation),
        diagnostics: validation.diagnostics(),
    })
}

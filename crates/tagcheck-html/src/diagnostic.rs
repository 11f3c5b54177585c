use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// The text shown when a document produces no diagnostics.
pub const SUCCESS_MESSAGE: &str = "HTML validation passed.";

/// What kind of problem a [`Diagnostic`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A `>` with nothing to close
    UnexpectedSymbol,
    /// A `<` left open at the end of its line
    MissingBracket,
    /// A `<!...>` construct that is not a comment, conditional block or DOCTYPE
    MalformedComment,
    /// A tag the dictionary does not know
    UnknownTag,
    /// An attribute the dictionary does not allow on its tag
    InvalidAttribute,
    /// A closing tag that matches an element deeper in the stack
    MisnestedClosingTag,
    /// A closing tag that matches nothing on the stack
    UnexpectedClosingTag,
    /// An element that was never closed
    UnclosedTag,
    /// No `<!DOCTYPE html>` anywhere in the document
    MissingDoctype,
    /// `<html>`, `<head>` or `<body>` never opened
    MissingEssentialTag,
    /// `<html>`, `<head>` or `<body>` opened but never closed
    UnclosedEssentialTag,
}

/// A single finding.
///
/// Line-level findings carry the 1-based line they were found on;
/// document-level findings (missing DOCTYPE, missing `<html>`, ...) carry none.
/// `Display` renders the user-facing text, e.g. `Line 3: Missing closing </p>.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number, absent for document-level findings
    pub line: Option<usize>,
    /// Category of the finding
    pub kind: DiagnosticKind,
    /// Message without the `Line N: ` prefix
    pub message: String,
}

impl Diagnostic {
    fn at(line: usize, kind: DiagnosticKind, message: String) -> Self {
        Self {
            line: Some(line),
            kind,
            message,
        }
    }

    fn document(kind: DiagnosticKind, message: String) -> Self {
        Self {
            line: None,
            kind,
            message,
        }
    }

    /// `Line N: Unexpected symbol >`
    #[must_use]
    pub fn unexpected_symbol(line: usize) -> Self {
        Self::at(line, DiagnosticKind::UnexpectedSymbol, "Unexpected symbol >".to_string())
    }

    /// `Line N: Missing closing ">".`
    #[must_use]
    pub fn missing_bracket(line: usize) -> Self {
        Self::at(
            line,
            DiagnosticKind::MissingBracket,
            "Missing closing \">\".".to_string(),
        )
    }

    /// `Line N: Malformed comment.`
    #[must_use]
    pub fn malformed_comment(line: usize) -> Self {
        Self::at(
            line,
            DiagnosticKind::MalformedComment,
            "Malformed comment.".to_string(),
        )
    }

    /// `Line N: Unknown or unsupported tag <TAG>.`
    #[must_use]
    pub fn unknown_tag(line: usize, tag: &str) -> Self {
        Self::at(
            line,
            DiagnosticKind::UnknownTag,
            format!("Unknown or unsupported tag <{tag}>."),
        )
    }

    /// `Line N: Invalid attribute 'ATTR' for tag <TAG>.`
    #[must_use]
    pub fn invalid_attribute(line: usize, attribute: &str, tag: &str) -> Self {
        Self::at(
            line,
            DiagnosticKind::InvalidAttribute,
            format!("Invalid attribute '{attribute}' for tag <{tag}>."),
        )
    }

    /// `Line N: Unexpected closing tag </TAG>. Other tags were expected to close first.`
    #[must_use]
    pub fn misnested_closing_tag(line: usize, tag: &str) -> Self {
        Self::at(
            line,
            DiagnosticKind::MisnestedClosingTag,
            format!("Unexpected closing tag </{tag}>. Other tags were expected to close first."),
        )
    }

    /// `Line N: Unexpected closing tag </TAG>. Expected </EXPECTED>.`
    ///
    /// `expected` is `None` when nothing was open, rendered literally as `</None>`.
    #[must_use]
    pub fn unexpected_closing_tag(line: usize, tag: &str, expected: Option<&str>) -> Self {
        let expected = expected.unwrap_or("None");
        Self::at(
            line,
            DiagnosticKind::UnexpectedClosingTag,
            format!("Unexpected closing tag </{tag}>. Expected </{expected}>."),
        )
    }

    /// `Line N: Missing closing </TAG>.`
    #[must_use]
    pub fn unclosed_tag(line: usize, tag: &str) -> Self {
        Self::at(
            line,
            DiagnosticKind::UnclosedTag,
            format!("Missing closing </{tag}>."),
        )
    }

    /// `Missing DOCTYPE declaration.`
    #[must_use]
    pub fn missing_doctype() -> Self {
        Self::document(
            DiagnosticKind::MissingDoctype,
            "Missing DOCTYPE declaration.".to_string(),
        )
    }

    /// `Missing <TAG> tag.`
    #[must_use]
    pub fn missing_essential_tag(tag: &str) -> Self {
        Self::document(
            DiagnosticKind::MissingEssentialTag,
            format!("Missing <{tag}> tag."),
        )
    }

    /// `Missing closing </TAG> tag.`
    #[must_use]
    pub fn unclosed_essential_tag(tag: &str) -> Self {
        Self::document(
            DiagnosticKind::UnclosedEssentialTag,
            format!("Missing closing </{tag}> tag."),
        )
    }

    /// True for bracket-balance findings.
    #[must_use]
    pub const fn is_bracket_issue(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::UnexpectedSymbol | DiagnosticKind::MissingBracket
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of validating one document.
///
/// There is no partial result: either the whole document passed, or every
/// finding is listed in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// No findings
    Passed,
    /// One or more findings, never empty
    Diagnostics(Vec<Diagnostic>),
}

impl Validation {
    /// `Passed` for an empty list, `Diagnostics` otherwise.
    #[must_use]
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        if diagnostics.is_empty() {
            Self::Passed
        } else {
            Self::Diagnostics(diagnostics)
        }
    }

    /// True if the document produced no findings.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// The findings; empty when the document passed.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Passed => &[],
            Self::Diagnostics(diagnostics) => diagnostics,
        }
    }

    /// The rendered message of every finding, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics().iter().map(ToString::to_string).collect()
    }
}

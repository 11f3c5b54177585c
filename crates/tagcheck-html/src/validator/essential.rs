use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::diagnostic::Diagnostic;

/// The structural elements every document is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EssentialTag {
    /// `<html>`
    Html,
    /// `<head>`
    Head,
    /// `<body>`
    Body,
}

impl EssentialTag {
    /// Match a lowercase tag name. Misspellings are not essential tags.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|tag| tag.as_ref() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Html => 0,
            Self::Head => 1,
            Self::Body => 2,
        }
    }
}

/// Tracking state for one essential tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EssentialTagState {
    /// An opening tag was seen
    pub found: bool,
    /// A closing tag was seen
    pub closed: bool,
    /// Line of the first opening tag
    pub first_line_found: Option<usize>,
}

/// State of `<html>`, `<head>` and `<body>` across a whole document.
#[derive(Debug, Clone, Default)]
pub struct EssentialTags {
    states: [EssentialTagState; 3],
}

impl EssentialTags {
    /// Record an opening or closing occurrence of `tag` on `line`.
    pub const fn record(&mut self, tag: EssentialTag, is_closing: bool, line: usize) {
        let state = &mut self.states[tag.index()];
        if is_closing {
            state.closed = true;
        } else {
            state.found = true;
            if state.first_line_found.is_none() {
                state.first_line_found = Some(line);
            }
        }
    }

    /// Current state of `tag`.
    #[must_use]
    pub const fn state(&self, tag: EssentialTag) -> EssentialTagState {
        self.states[tag.index()]
    }

    /// Document-level findings, in fixed order: DOCTYPE, html, head, body.
    ///
    /// `<head>` and `<body>` are only checked when `<html>` was found.
    #[must_use]
    pub fn diagnostics(&self, doctype_found: bool) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if !doctype_found {
            diagnostics.push(Diagnostic::missing_doctype());
        }

        self.check(EssentialTag::Html, &mut diagnostics);
        if self.state(EssentialTag::Html).found {
            self.check(EssentialTag::Head, &mut diagnostics);
            self.check(EssentialTag::Body, &mut diagnostics);
        }

        diagnostics
    }

    fn check(&self, tag: EssentialTag, diagnostics: &mut Vec<Diagnostic>) {
        let state = self.state(tag);
        if !state.found {
            diagnostics.push(Diagnostic::missing_essential_tag(tag.as_ref()));
        } else if !state.closed {
            diagnostics.push(Diagnostic::unclosed_essential_tag(tag.as_ref()));
        }
    }
}

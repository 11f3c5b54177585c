use tagcheck_dict::TagDictionary;

use crate::diagnostic::{Diagnostic, Validation};
use crate::scanner::{self, BracketIssue, DeclarationKind, ScannedLine, TagEvent};

use super::essential::{EssentialTag, EssentialTagState, EssentialTags};

/// An element that was opened and is waiting for its closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenElement {
    /// Line of the opening tag
    pub line: usize,
    /// Lowercase tag name
    pub tag_name: String,
}

/// State of one validation run.
///
/// Feed it lines in order with [`Engine::feed_line`], then call
/// [`Engine::finish`]. A fresh engine is needed for every document; the only
/// thing shared between runs is the read-only dictionary.
#[derive(Debug)]
pub struct Engine<'d> {
    dictionary: &'d TagDictionary,
    /// Stack of open elements. Only non-void elements are ever pushed.
    open_elements: Vec<OpenElement>,
    essential: EssentialTags,
    doctype_found: bool,
    diagnostics: Vec<Diagnostic>,
    lines_seen: usize,
}

impl<'d> Engine<'d> {
    /// Start a run against `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'d TagDictionary) -> Self {
        Self {
            dictionary,
            open_elements: Vec::new(),
            essential: EssentialTags::default(),
            doctype_found: false,
            diagnostics: Vec::new(),
            lines_seen: 0,
        }
    }

    /// Scan and process the next line of the document.
    pub fn feed_line(&mut self, text: &str) {
        self.lines_seen += 1;
        let line = scanner::scan_line(self.lines_seen, text);
        self.process_line(&line);
    }

    /// Process a line that has already been scanned.
    pub fn process_line(&mut self, line: &ScannedLine) {
        for issue in &line.bracket_issues {
            self.diagnostics.push(match issue {
                BracketIssue::UnexpectedClose => Diagnostic::unexpected_symbol(line.number),
                BracketIssue::MissingClose => Diagnostic::missing_bracket(line.number),
            });
        }

        if !self.doctype_found && line.declares_doctype {
            self.doctype_found = true;
        }

        for kind in &line.declarations {
            if *kind == DeclarationKind::Malformed {
                self.diagnostics.push(Diagnostic::malformed_comment(line.number));
            }
        }

        for tag in &line.tags {
            self.process_tag(line.number, tag);
        }
    }

    fn process_tag(&mut self, line: usize, tag: &TagEvent) {
        let dictionary = self.dictionary;
        let Some(definition) = dictionary.lookup(&tag.name) else {
            self.diagnostics.push(Diagnostic::unknown_tag(line, &tag.name));
            return;
        };
        let name = definition.name.as_str();

        if let Some(essential) = EssentialTag::from_name(name) {
            self.essential.record(essential, tag.is_closing, line);
        }

        for attribute in tag.attribute_names() {
            if !definition.allows_attribute(attribute) {
                self.diagnostics
                    .push(Diagnostic::invalid_attribute(line, attribute, name));
            }
        }

        if tag.is_closing {
            self.close_element(line, &tag.name, name);
        } else if !definition.is_void {
            self.open_elements.push(OpenElement {
                line,
                tag_name: name.to_string(),
            });
        }
    }

    /// Match a closing tag against the stack.
    ///
    /// `written` is the name as it appeared in the source, `name` its
    /// lowercase form.
    fn close_element(&mut self, line: usize, written: &str, name: &str) {
        if self
            .open_elements
            .last()
            .is_some_and(|top| top.tag_name == name)
        {
            let _ = self.open_elements.pop();
            return;
        }

        let Some(position) = self
            .open_elements
            .iter()
            .rposition(|open| open.tag_name == name)
        else {
            let expected = self.open_elements.last().map(|top| top.tag_name.as_str());
            self.diagnostics
                .push(Diagnostic::unexpected_closing_tag(line, written, expected));
            return;
        };

        // Recover: everything opened after the match was never closed.
        self.diagnostics
            .push(Diagnostic::misnested_closing_tag(line, written));
        for unclosed in self.open_elements.drain(position + 1..).rev() {
            self.diagnostics
                .push(Diagnostic::unclosed_tag(unclosed.line, &unclosed.tag_name));
        }
        let _ = self.open_elements.pop();
    }

    /// Elements currently open, outermost first.
    #[must_use]
    pub fn open_elements(&self) -> &[OpenElement] {
        &self.open_elements
    }

    /// Tracking state of an essential tag so far.
    #[must_use]
    pub const fn essential_state(&self, tag: EssentialTag) -> EssentialTagState {
        self.essential.state(tag)
    }

    /// Whether a `<!DOCTYPE html>` line has been seen so far.
    #[must_use]
    pub const fn doctype_found(&self) -> bool {
        self.doctype_found
    }

    /// Run the end-of-document checks and produce the result.
    ///
    /// Document-level findings come first, then the per-line findings in scan
    /// order, then one finding per element still open, outermost first.
    #[must_use]
    pub fn finish(self) -> Validation {
        let mut diagnostics = self.essential.diagnostics(self.doctype_found);
        diagnostics.extend(self.diagnostics);
        diagnostics.extend(
            self.open_elements
                .into_iter()
                .map(|open| Diagnostic::unclosed_tag(open.line, &open.tag_name)),
        );
        Validation::from_diagnostics(diagnostics)
    }
}

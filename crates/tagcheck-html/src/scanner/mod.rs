//! Line-oriented lexical scanner.
//!
//! The scanner looks at one line at a time and never consumes the next one:
//! a tag split across two lines is not recognized. Each line goes through
//! five passes, all on the trimmed text:
//!
//! 1. bracket balance (`<` pushes, `>` pops)
//! 2. `<!DOCTYPE html>` detection
//! 3. `<!...>` classification (comments, conditional blocks, declarations)
//! 4. tag extraction
//! 5. attribute extraction, done lazily through [`TagEvent::attribute_names`]

/// Scanner output types.
pub mod event;
mod patterns;

pub use event::{BracketIssue, DeclarationKind, ScannedLine, TagEvent};

/// Split a document into `(line_number, line)` pairs, numbering from 1.
///
/// Lines end at `\n`; a trailing `\r` is dropped.
pub fn numbered_lines(document: &str) -> impl Iterator<Item = (usize, &str)> {
    document.lines().enumerate().map(|(index, line)| (index + 1, line))
}

/// Scan a single line.
#[must_use]
pub fn scan_line(number: usize, line: &str) -> ScannedLine {
    let line = line.trim();
    let (declarations, masked) = patterns::declarations(line);

    ScannedLine {
        number,
        bracket_issues: bracket_issues(line),
        declares_doctype: patterns::is_doctype(line),
        declarations,
        tags: patterns::tags(&masked),
    }
}

/// Check `<` / `>` balance on one line.
///
/// Every `>` without a pending `<` is reported as it is met; pending `<`
/// markers left at the end are reported afterwards, one issue each.
#[must_use]
pub fn bracket_issues(line: &str) -> Vec<BracketIssue> {
    let mut issues = Vec::new();
    let mut open = 0usize;

    for c in line.chars() {
        match c {
            '<' => open += 1,
            '>' if open > 0 => open -= 1,
            '>' => issues.push(BracketIssue::UnexpectedClose),
            _ => {}
        }
    }
    issues.extend(std::iter::repeat_n(BracketIssue::MissingClose, open));

    issues
}

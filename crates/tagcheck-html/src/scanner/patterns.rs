//! Compiled patterns for the tag-like constructs the scanner recognizes.
//!
//! Every pattern is applied to a single, already trimmed line.

use std::sync::LazyLock;

use regex::Regex;

use super::event::{DeclarationKind, TagEvent};

// `<`, optional `/`, a word token, optional whitespace-separated attribute text, `>`
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)(\w+)(?:\s+([^>]*?))?>").expect("tag pattern is valid"));

// An attribute name, optionally followed by `=` and a double-quoted,
// single-quoted or bare value. Values are consumed so they never yield names.
static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#)
        .expect("attribute pattern is valid")
});

static DOCTYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<!doctype\s+html(?:\s[^>]*)?>").expect("doctype pattern is valid")
});

// Alternation order matters: the first branch that matches at a position wins.
// `<!-->` and `<!--->` end at their own `>` and are never the start of a comment.
static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        (?P<conditional> <!--\[if [^\]]* \]> | <!\[ [^>]* > )
        | (?P<abrupt> <!---?> )
        | (?P<comment> <!-- .*? --> )
        | (?P<doctype> <!doctype (?:\s[^>]*)? > )
        | (?P<malformed> <! [^>]* >? )",
    )
    .expect("declaration pattern is valid")
});

/// Whether the line opens with a `<!DOCTYPE html>` declaration.
pub(crate) fn is_doctype(line: &str) -> bool {
    DOCTYPE_PATTERN.is_match(line)
}

/// Classify every `<!...>` construct on the line.
///
/// Returns the kinds in order together with a copy of the line in which
/// properly closed comments are blanked out, so markup inside them is not
/// reported as tags.
pub(crate) fn declarations(line: &str) -> (Vec<DeclarationKind>, String) {
    let mut kinds = Vec::new();
    let mut masked = String::with_capacity(line.len());
    let mut last = 0;

    for caps in DECLARATION_PATTERN.captures_iter(line) {
        let kind = if caps.name("conditional").is_some() {
            DeclarationKind::Conditional
        } else if caps.name("comment").is_some() {
            DeclarationKind::Comment
        } else if caps.name("doctype").is_some() {
            DeclarationKind::Doctype
        } else {
            DeclarationKind::Malformed
        };
        kinds.push(kind);

        if kind == DeclarationKind::Comment
            && let Some(whole) = caps.get(0)
        {
            masked.push_str(&line[last..whole.start()]);
            masked.extend(std::iter::repeat_n(' ', whole.as_str().chars().count()));
            last = whole.end();
        }
    }
    masked.push_str(&line[last..]);

    (kinds, masked)
}

/// Extract tag events left to right.
pub(crate) fn tags(line: &str) -> Vec<TagEvent> {
    TAG_PATTERN
        .captures_iter(line)
        .map(|caps| TagEvent {
            is_closing: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
            name: caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
            raw_attributes: caps
                .get(3)
                .map_or_else(String::new, |m| m.as_str().to_string()),
        })
        .collect()
}

/// Candidate attribute names in `raw`, in order of appearance.
pub(crate) fn attribute_names(raw: &str) -> Vec<&str> {
    ATTRIBUTE_PATTERN
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

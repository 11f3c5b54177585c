use super::patterns::attribute_names;

/// A tag-like construct recognized on a single line.
///
/// `<div class="x">` yields `TagEvent { is_closing: false, name: "div", raw_attributes: "class=\"x\"" }`.
/// The name keeps the spelling found in the source; lookups lowercase it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    /// True for `</name>`
    pub is_closing: bool,
    /// Tag name as written
    pub name: String,
    /// Everything between the tag name and `>`, without the separating whitespace
    pub raw_attributes: String,
}

impl TagEvent {
    /// Candidate attribute names in order of appearance.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<&str> {
        attribute_names(&self.raw_attributes)
    }
}

/// A stray angle bracket found by the balance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketIssue {
    /// A `>` with no `<` before it on the line
    UnexpectedClose,
    /// A `<` still open at the end of the line
    MissingClose,
}

/// Classification of a `<!...>` construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `<!-- ... -->` closed on the same line
    Comment,
    /// `<!--[if ...]>` or `<![...]>`
    Conditional,
    /// `<!DOCTYPE ...>`
    Doctype,
    /// Anything else that starts with `<!`
    Malformed,
}

/// Everything the scanner extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// 1-based line number
    pub number: usize,
    /// Bracket problems: every stray `>` in order, then one entry per unclosed `<`
    pub bracket_issues: Vec<BracketIssue>,
    /// True if the line starts with `<!DOCTYPE html>`
    pub declares_doctype: bool,
    /// `<!...>` constructs in order of appearance
    pub declarations: Vec<DeclarationKind>,
    /// Tags in order of appearance, excluding markup inside comments
    pub tags: Vec<TagEvent>,
}

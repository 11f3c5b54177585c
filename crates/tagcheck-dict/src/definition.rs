use std::collections::BTreeSet;

/// Prefixes of author-defined attributes that are valid on every element.
///
/// The generated table lists concrete attribute names only, so `data-*` and
/// `aria-*` families are accepted by prefix.
const OPEN_ATTRIBUTE_PREFIXES: [&str; 2] = ["data-", "aria-"];

/// What the dictionary knows about one HTML element.
///
/// Created once when the dictionary is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// Lowercase tag name, the identity key
    pub name: String,
    /// Human-readable summary from the reference documentation
    pub description: String,
    /// True if the element must not have a matching closing tag (`img`, `br`, ...)
    pub is_void: bool,
    /// Lowercase names of the element's own attributes plus the global ones
    pub allowed_attributes: BTreeSet<String>,
}

impl TagDefinition {
    /// Create a definition. Names are expected to already be lowercase.
    #[must_use]
    pub const fn new(
        name: String,
        description: String,
        is_void: bool,
        allowed_attributes: BTreeSet<String>,
    ) -> Self {
        Self {
            name,
            description,
            is_void,
            allowed_attributes,
        }
    }

    /// Whether `attribute` may appear on this element.
    ///
    /// The comparison is ASCII case-insensitive.
    ///
    /// This is wider than plain membership in `allowed_attributes`: `data-*`
    /// and `aria-*` attributes are always allowed as long as something
    /// follows the prefix, even though the dictionary never lists them.
    /// Names arrive whole with their hyphens (`http-equiv`, `data-id`), not
    /// split into word tokens.
    #[must_use]
    pub fn allows_attribute(&self, attribute: &str) -> bool {
        let lower = attribute.to_ascii_lowercase();
        if OPEN_ATTRIBUTE_PREFIXES
            .iter()
            .any(|prefix| lower.len() > prefix.len() && lower.starts_with(prefix))
        {
            return true;
        }
        self.allowed_attributes.contains(&lower)
    }
}

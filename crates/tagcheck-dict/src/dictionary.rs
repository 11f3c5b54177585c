use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tagcheck_common::warning::warn_once;

use crate::definition::TagDefinition;
use crate::error::DictionaryError;

/// The table generated by the offline scraper, embedded at compile time.
const BUNDLED_JSON: &str = include_str!("../data/html_tags.json");

/// One entry of the JSON source, before normalization.
///
/// `{ "description": "...", "void": false, "attributes": ["href", ...] }`
#[derive(Debug, Deserialize)]
struct RawTagEntry {
    #[serde(default)]
    description: String,
    void: bool,
    #[serde(default)]
    attributes: Vec<String>,
}

/// Immutable lookup table from lowercase tag name to [`TagDefinition`].
///
/// Build one at startup and share it by reference; it is never mutated after
/// loading, so concurrent validations need no synchronization.
#[derive(Debug, Clone)]
pub struct TagDictionary {
    tags: BTreeMap<String, TagDefinition>,
}

impl TagDictionary {
    /// The dictionary that ships with tagcheck.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded table is corrupt, which would be
    /// a build problem rather than a user problem.
    pub fn bundled() -> Result<Self, DictionaryError> {
        Self::from_json_str(BUNDLED_JSON)
    }

    /// Load a dictionary from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read, and any
    /// error [`TagDictionary::from_json_str`] can return.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    /// Parse a dictionary from its JSON source text.
    ///
    /// Tag and attribute names are trimmed and lowercased. Names that needed
    /// normalizing are reported through the warning system.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] for malformed JSON,
    /// [`DictionaryError::EmptyTagName`] or [`DictionaryError::DuplicateTag`]
    /// for bad keys, and [`DictionaryError::Empty`] if no tags are defined.
    pub fn from_json_str(source: &str) -> Result<Self, DictionaryError> {
        let raw: BTreeMap<String, RawTagEntry> = serde_json::from_str(source)?;
        if raw.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut tags = BTreeMap::new();
        for (raw_name, entry) in raw {
            let name = normalize_name(&raw_name);
            if name.is_empty() {
                return Err(DictionaryError::EmptyTagName);
            }
            if name != raw_name {
                warn_once(
                    "Dictionary",
                    &format!("tag name '{raw_name}' normalized to '{name}'"),
                );
            }
            if tags.contains_key(&name) {
                return Err(DictionaryError::DuplicateTag(name));
            }

            let allowed_attributes = normalize_attributes(&name, entry.attributes);
            let definition =
                TagDefinition::new(name.clone(), entry.description, entry.void, allowed_attributes);
            let _ = tags.insert(name, definition);
        }

        Ok(Self { tags })
    }

    /// Look up a tag by name, ignoring ASCII case.
    #[must_use]
    pub fn lookup(&self, tag_name: &str) -> Option<&TagDefinition> {
        let key: Cow<'_, str> = if tag_name.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(tag_name.to_ascii_lowercase())
        } else {
            Cow::Borrowed(tag_name)
        };
        self.tags.get(key.as_ref())
    }

    /// Whether the dictionary knows `tag_name` (case-insensitive).
    #[must_use]
    pub fn contains(&self, tag_name: &str) -> bool {
        self.lookup(tag_name).is_some()
    }

    /// Number of known tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True if no tags are known. A loaded dictionary is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All definitions, sorted by tag name.
    pub fn iter(&self) -> impl Iterator<Item = &TagDefinition> {
        self.tags.values()
    }
}

fn normalize_name(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

fn normalize_attributes(tag: &str, attributes: Vec<String>) -> BTreeSet<String> {
    let mut allowed = BTreeSet::new();
    for raw in attributes {
        let attribute = normalize_name(&raw);
        if attribute.is_empty() {
            warn_once(
                "Dictionary",
                &format!("empty attribute name ignored for <{tag}>"),
            );
            continue;
        }
        if attribute != raw {
            warn_once(
                "Dictionary",
                &format!("attribute '{raw}' of <{tag}> normalized to '{attribute}'"),
            );
        }
        if !allowed.insert(attribute) {
            warn_once(
                "Dictionary",
                &format!("attribute '{}' listed more than once for <{tag}>", raw.trim()),
            );
        }
    }
    allowed
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A tag dictionary could not be loaded.
///
/// Every variant is fatal: the validator refuses to start without a usable
/// dictionary rather than reporting per-document noise.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read tag dictionary '{}': {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// The dictionary source is not valid JSON or does not have the expected shape.
    #[error("malformed tag dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries normalize to the same lowercase tag name.
    #[error("tag dictionary defines <{0}> more than once (names are case-insensitive)")]
    DuplicateTag(String),

    /// An entry has an empty (or all-whitespace) tag name.
    #[error("tag dictionary contains an entry with an empty tag name")]
    EmptyTagName,

    /// The dictionary source contains no entries at all.
    #[error("tag dictionary is empty")]
    Empty,
}

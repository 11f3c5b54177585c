use core::str::Utf8Error;

use thiserror::Error;

/// The input could not be treated as a text document.
///
/// Malformed markup is never an error; it is reported as diagnostics. These
/// variants cover the cases where validation cannot start at all.
#[derive(Debug, Error)]
pub enum InputError {
    /// The bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 text: {0}")]
    Decode(#[from] Utf8Error),

    /// The input exceeds the configured size bound.
    #[error("input is {actual} bytes, larger than the {limit}-byte limit")]
    TooLarge {
        /// Size of the rejected input in bytes
        actual: usize,
        /// Configured maximum in bytes
        limit: usize,
    },
}

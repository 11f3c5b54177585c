//! The validation engine.
//!
//! A [`Validator`] holds the shared, read-only [`TagDictionary`] and runs one
//! fresh [`Engine`] per document, so repeated or concurrent validations never
//! see each other's state.

/// Per-run state machine: open-element stack and diagnostics.
pub mod engine;
/// Tracking of `<html>`, `<head>` and `<body>`.
pub mod essential;

pub use engine::{Engine, OpenElement};
pub use essential::{EssentialTag, EssentialTagState};

use tagcheck_dict::TagDictionary;

use crate::diagnostic::Validation;
use crate::error::InputError;
use crate::scanner;

/// Byte order mark, ignored at the start of a document.
const BOM: char = '\u{feff}';

/// Limits applied by [`Validator::validate_bytes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Reject inputs larger than this many bytes. `None` means unbounded.
    pub max_input_bytes: Option<usize>,
}

/// Validates documents against a tag dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'d> {
    dictionary: &'d TagDictionary,
    options: ValidatorOptions,
}

impl<'d> Validator<'d> {
    /// A validator with default options.
    #[must_use]
    pub fn new(dictionary: &'d TagDictionary) -> Self {
        Self::with_options(dictionary, ValidatorOptions::default())
    }

    /// A validator with explicit options.
    #[must_use]
    pub const fn with_options(dictionary: &'d TagDictionary, options: ValidatorOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Validate a complete document.
    ///
    /// Never fails: malformed markup is reported as diagnostics. A leading
    /// byte order mark is ignored.
    #[must_use]
    pub fn validate(&self, document: &str) -> Validation {
        let document = document.strip_prefix(BOM).unwrap_or(document);
        let mut engine = Engine::new(self.dictionary);
        for (number, line) in scanner::numbered_lines(document) {
            engine.process_line(&scanner::scan_line(number, line));
        }
        engine.finish()
    }

    /// Decode raw bytes as UTF-8 text and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooLarge`] if the input exceeds
    /// [`ValidatorOptions::max_input_bytes`], and [`InputError::Decode`] if
    /// the bytes are not UTF-8. Nothing is validated in either case.
    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<Validation, InputError> {
        if let Some(limit) = self.options.max_input_bytes
            && bytes.len() > limit
        {
            return Err(InputError::TooLarge {
                actual: bytes.len(),
                limit,
            });
        }

        let document = core::str::from_utf8(bytes)?;
        Ok(self.validate(document))
    }
}

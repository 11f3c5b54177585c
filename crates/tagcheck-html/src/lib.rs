//! Line-oriented HTML tag checker.
//!
//! # Scope
//!
//! This crate implements:
//! - **Lexical Scanner** - per-line bracket balance, DOCTYPE detection,
//!   comment classification, tag and attribute extraction
//! - **Validation Engine** - stack of open elements with mismatch recovery,
//!   essential structure checks (DOCTYPE, `<html>`, `<head>`, `<body>`),
//!   attribute checks against a [`tagcheck_dict::TagDictionary`]
//! - **Reporter** - plain text and JSON rendering of the result
//!
//! # Not Implemented
//!
//! - Raw text modes for `<script>` and `<style>`
//! - Character reference decoding
//! - DOM tree construction
//! - Tags or comments that span more than one line
//!
//! # Example
//!
//! ```
//! use tagcheck_dict::TagDictionary;
//! use tagcheck_html::Validator;
//!
//! let dictionary = TagDictionary::bundled().unwrap();
//! let result = Validator::new(&dictionary).validate("<div><span></div>");
//! assert!(result
//!     .messages()
//!     .contains(&"Line 1: Missing closing </span>.".to_string()));
//! ```

/// Diagnostics and the overall validation result.
pub mod diagnostic;
/// Errors for input that cannot be validated at all.
pub mod error;
pub mod report;
pub mod scanner;
pub mod validator;

pub use diagnostic::{Diagnostic, DiagnosticKind, SUCCESS_MESSAGE, Validation};
pub use error::InputError;
pub use validator::{Engine, Validator, ValidatorOptions};

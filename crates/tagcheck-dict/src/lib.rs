//! Tag dictionary for the tagcheck validator.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag definitions** - void status and permitted attribute names per tag
//! - **Dictionary loading** - from a JSON file, a JSON string, or the bundled
//!   table that ships with the workspace (`data/html_tags.json`)
//! - **Case-insensitive lookup** - every stored name is lowercase
//!
//! The table itself is produced offline by crawling reference documentation.
//! Loading never touches the network, and a missing or malformed table is a
//! configuration error reported once at startup.

/// Tag definitions and attribute checks.
pub mod definition;
/// The dictionary and its loaders.
pub mod dictionary;
/// Configuration errors raised while loading a dictionary.
pub mod error;

pub use definition::TagDefinition;
pub use dictionary::TagDictionary;
pub use error::DictionaryError;

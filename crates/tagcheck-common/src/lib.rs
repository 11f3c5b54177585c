//! Common utilities for the tagcheck validator.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - deduplicated, colored stderr output for non-fatal
//!   oddities (for example a dictionary entry that had to be normalized)

pub mod warning;

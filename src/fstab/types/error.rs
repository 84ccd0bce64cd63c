//! Custom error types for the fstab-reader crate.

use std::num::ParseIntError;
use thiserror::Error;

use super::models::Field;

/// The primary error type for all parsing operations in this crate.
///
/// Every variant carries the line number of the offending line so the
/// caller can point a user at the malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FstabError {
    /// A non-comment, non-blank line did not split into exactly six fields.
    #[error("Expected 6 fields in fstab line {line}, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    /// The dump frequency or fsck pass number is not a 16-bit base-10 integer.
    #[error("Failed parsing {field} '{value}' in fstab line {line}: {source}")]
    InvalidInteger {
        field: Field,
        value: String,
        line: usize,
        #[source]
        source: ParseIntError,
    },
}

impl FstabError {
    /// Returns the line number the error was raised for.
    pub fn line(&self) -> usize {
        match self {
            FstabError::WrongFieldCount { line, .. } => *line,
            FstabError::InvalidInteger { line, .. } => *line,
        }
    }
}

/// A convenience `Result` type alias using the crate's `FstabError` type.
pub type Result<T> = std::result::Result<T, FstabError>;

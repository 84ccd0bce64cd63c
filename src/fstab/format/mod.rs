//! Text format parsing layer for fstab files.
//!
//! # Module Organization
//!
//! - [`entry`]: Parses a single line into an [`FstabEntry`](crate::fstab::types::models::FstabEntry)
//! - [`table`]: Splits a buffer into lines, skips blanks/comments and collects entries
//!
//! ```text
//! bytes ──decode──▶ text ──table::parse_lines──▶ lines ──entry::parse_line──▶ entries
//! ```

pub mod entry;
pub mod table;

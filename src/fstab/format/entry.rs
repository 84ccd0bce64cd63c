//! Parsing of a single fstab line.
//!
//! # Line Structure
//! ```text
//! <spec> <mount point> <vfs type> <options> <dump frequency> <fsck pass>
//! ```
//! Fields are separated by runs of whitespace. No quoting or escaping is
//! recognised, so a line must split into exactly six tokens.

use log::trace;

use crate::fstab::types::{
    error::{FstabError, Result},
    models::{Field, FstabEntry},
};

/// Parses one non-comment, non-blank line into an entry.
///
/// `line_number` only ends up in error values; it has no effect on the result.
pub fn parse_line(line: &str, line_number: usize) -> Result<FstabEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [spec, mount_point, vfs_type, mount_options, freq, passno] = fields[..] else {
        return Err(FstabError::WrongFieldCount {
            line: line_number,
            found: fields.len(),
        });
    };

    let dump_frequency = parse_number(freq, Field::DumpFrequency, line_number)?;
    let fsck_pass_number = parse_number(passno, Field::FsckPassNumber, line_number)?;
    trace!("Line {}: spec='{}', mount point='{}', type='{}'", line_number, spec, mount_point, vfs_type);

    Ok(FstabEntry::new(
        spec,
        mount_point,
        vfs_type,
        mount_options,
        dump_frequency,
        fsck_pass_number,
    ))
}

/// Parses a base-10 number that must fit in a signed 16-bit integer.
fn parse_number(value: &str, field: Field, line_number: usize) -> Result<i32> {
    value
        .parse::<i16>()
        .map(i32::from)
        .map_err(|source| FstabError::InvalidInteger {
            field,
            value: value.to_string(),
            line: line_number,
            source,
        })
}

impl FstabEntry {
    /// Attempts to parse an entry from a single line.
    ///
    /// # Errors
    /// - [`FstabError::WrongFieldCount`] if the line does not have six fields
    /// - [`FstabError::InvalidInteger`] if either numeric column does not fit in 16 bits
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        parse_line(line, line_number)
    }
}

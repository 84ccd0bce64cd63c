//! Line-level parsing of a whole fstab buffer.

use log::{debug, trace};

use crate::fstab::types::{error::Result, models::FstabEntry};

use super::entry;

/// Marker that starts a comment line (after leading whitespace).
const COMMENT_PREFIX: char = '#';

/// Returns true if a trimmed line carries no entry.
fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_PREFIX)
}

/// Parses every entry line of `text`, in order.
///
/// Lines are split on `\n` and trimmed; blank lines and `#` comments are
/// skipped. The 0-based index of each line is handed to the entry parser for
/// diagnostics. Parsing stops at the first malformed line and returns its error.
pub fn parse_lines(text: &str) -> Result<Vec<FstabEntry>> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (line_number, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if is_skipped(line) {
            trace!("Line {}: skipped", line_number);
            skipped += 1;
            continue;
        }
        entries.push(entry::parse_line(line, line_number)?);
    }

    debug!("Parsed {} entries, skipped {} blank or comment lines", entries.len(), skipped);
    Ok(entries)
}

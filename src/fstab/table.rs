use std::fmt;
use std::slice;

use encoding_rs::UTF_8;
use log::info;

use super::format;
use super::types::error::Result;
use super::types::models::{FstabEntry, ParseOptions};
use super::utils;

/// A parsed filesystem table.
///
/// Holds entries in file order. The table is read-only once built;
/// [`filter`](Self::filter) returns a new, independent table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fstab {
    entries: Vec<FstabEntry>,
}

impl Fstab {
    /// Parse a table from raw bytes, decoded as UTF-8.
    ///
    /// # Errors
    /// Returns the error of the first malformed entry line. No partial table
    /// is produced.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with(data, &ParseOptions::default())
    }

    /// Parse a table from raw bytes using the given options.
    ///
    /// Encoding priority (highest → lowest):
    /// 1. A byte order mark at the start of `data`
    /// 2. `options.encoding`
    /// 3. UTF-8
    pub fn parse_with(data: &[u8], options: &ParseOptions) -> Result<Self> {
        let encoding = options
            .encoding
            .as_deref()
            .map(utils::parse_encoding)
            .unwrap_or(UTF_8);
        info!("Parsing fstab: {} bytes as {}", data.len(), encoding.name());

        let text = utils::decode_text(data, encoding);
        let fstab = Self::parse_str(&text)?;

        info!("Fstab parsed: {} entries", fstab.len());
        Ok(fstab)
    }

    /// Parse a table from text that is already decoded.
    pub fn parse_str(text: &str) -> Result<Self> {
        format::table::parse_lines(text).map(Self::from)
    }

    /// Returns the entries in file order.
    pub fn items(&self) -> &[FstabEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries in file order.
    pub fn iter(&self) -> slice::Iter<'_, FstabEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new table with the entries for which `predicate` holds.
    ///
    /// Relative order is preserved and `self` is left untouched. The predicate
    /// is called exactly once per entry.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&FstabEntry) -> bool,
    {
        self.entries
            .iter()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }
}

impl From<Vec<FstabEntry>> for Fstab {
    fn from(entries: Vec<FstabEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<FstabEntry> for Fstab {
    fn from_iter<I: IntoIterator<Item = FstabEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Fstab {
    type Item = &'a FstabEntry;
    type IntoIter = slice::Iter<'a, FstabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Fstab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fstab[")?;
        for (n, entry) in self.entries.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("]")
    }
}

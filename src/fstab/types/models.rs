//! Core data structures for fstab records.
//!
//! This module defines the fundamental types used throughout the library:
//! - A single mount-table record ([`FstabEntry`])
//! - A borrowed view of one mount option ([`MountOption`])
//! - Names of the numeric columns ([`Field`])
//! - Parse-time settings ([`ParseOptions`])

use std::fmt;

/// One record of a filesystem table.
///
/// Mirrors the six columns of fstab(5). All fields are fixed at construction;
/// the type exposes read-only accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FstabEntry {
    spec: String,
    mount_point: String,
    vfs_type: String,
    mount_options: String,
    dump_frequency: i32,
    fsck_pass_number: i32,
}

impl FstabEntry {
    /// Creates a new entry from explicit field values.
    ///
    /// `spec` and `mount_point` lose one trailing `/` unless the value is
    /// exactly `/` or empty. Everything else is stored verbatim.
    pub fn new(
        spec: impl Into<String>,
        mount_point: impl Into<String>,
        vfs_type: impl Into<String>,
        mount_options: impl Into<String>,
        dump_frequency: i32,
        fsck_pass_number: i32,
    ) -> Self {
        Self {
            spec: strip_trailing_separator(spec.into()),
            mount_point: strip_trailing_separator(mount_point.into()),
            vfs_type: vfs_type.into(),
            mount_options: mount_options.into(),
            dump_frequency,
            fsck_pass_number,
        }
    }

    /// Returns the block device, remote share or pseudo filesystem to mount.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Returns the mount point of the entry.
    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Returns the virtual filesystem type of the entry.
    pub fn vfs_type(&self) -> &str {
        &self.vfs_type
    }

    /// Returns the raw, comma-joined mount options.
    pub fn mount_options(&self) -> &str {
        &self.mount_options
    }

    /// Returns the value dump(8) uses to decide whether the filesystem is backed up.
    pub fn dump_frequency(&self) -> i32 {
        self.dump_frequency
    }

    /// Returns the order in which fsck(8) checks the filesystem. `0` disables checking.
    pub fn fsck_pass_number(&self) -> i32 {
        self.fsck_pass_number
    }

    /// Returns true if fsck(8) is asked to check this filesystem at all.
    pub fn is_checked(&self) -> bool {
        self.fsck_pass_number != 0
    }

    /// Returns true if the vfs type equals one of `candidates` exactly.
    ///
    /// The comparison is case-sensitive. An empty candidate list never matches.
    pub fn has_vfs_type<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates.iter().any(|c| c.as_ref() == self.vfs_type)
    }

    /// Splits [`mount_options`](Self::mount_options) into a borrowed view of
    /// individual options (no copy, no interpretation).
    pub fn options(&self) -> impl Iterator<Item = MountOption<'_>> {
        self.mount_options
            .split(',')
            .filter(|o| !o.is_empty())
            .map(|o| match o.split_once('=') {
                Some((key, value)) => MountOption::KeyValue(key, value),
                None => MountOption::Flag(o),
            })
    }
}

impl fmt::Display for FstabEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.spec,
            self.mount_point,
            self.vfs_type,
            self.mount_options,
            self.dump_frequency,
            self.fsck_pass_number
        )
    }
}

/// Removes a single trailing `/`, leaving `/` itself and the empty string alone.
fn strip_trailing_separator(mut value: String) -> String {
    if value.len() > 1 && value.ends_with('/') {
        value.pop();
    }
    value
}

/// A single mount option borrowed from an entry's option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOption<'a> {
    /// Plain flag such as `defaults` or `noatime`.
    Flag(&'a str),
    /// `key=value` option such as `subvol=root`.
    KeyValue(&'a str, &'a str),
}

impl MountOption<'_> {
    /// Returns true if this is a plain flag.
    pub fn is_flag(&self) -> bool {
        matches!(self, MountOption::Flag(_))
    }

    /// Returns the option name (the flag itself, or the key of a key/value pair).
    pub fn name(&self) -> &str {
        match self {
            MountOption::Flag(name) | MountOption::KeyValue(name, _) => *name,
        }
    }
}

/// The two numeric columns of an fstab line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DumpFrequency,
    FsckPassNumber,
}

impl Field {
    /// Returns the column name used by fstab(5).
    pub fn name(&self) -> &'static str {
        match self {
            Field::DumpFrequency => "fs_freq",
            Field::FsckPassNumber => "fs_passno",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings applied when turning a raw buffer into a table.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Text encoding label (WHATWG names such as `"utf-8"`, `"latin1"`).
    /// `None` decodes as UTF-8.
    pub encoding: Option<String>,
}

impl ParseOptions {
    /// Returns options that decode the buffer with the given encoding label.
    pub fn with_encoding(label: impl Into<String>) -> Self {
        Self {
            encoding: Some(label.into()),
        }
    }
}

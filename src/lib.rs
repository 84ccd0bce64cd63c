//! # fstab-reader
//!
//! A reader for unix fstab(5) filesystem tables.
//!
//! The library turns an in-memory buffer into an ordered [`Fstab`] of
//! [`FstabEntry`] records and offers simple filtering over them. Reading the
//! file itself is left to the caller.
//!
//! ```
//! use fstab_reader::Fstab;
//!
//! let data = b"# root\n/dev/sda1 / ext4 defaults 0 1\nproc /proc proc defaults 0 0\n";
//! let fstab = Fstab::parse(data).unwrap();
//! let disks = fstab.filter(|e| e.has_vfs_type(&["ext4", "xfs"]));
//! assert_eq!(disks.len(), 1);
//! assert_eq!(disks.items()[0].mount_point(), "/");
//! ```
pub mod fstab;

// Re-export the main types for convenience
pub use fstab::{
    Fstab,
    FstabEntry,
    FstabError,
    Result,
    types::models::{Field, MountOption, ParseOptions},
};

//! Core fstab reader module

pub mod format;
pub mod table;
pub mod types;
pub mod utils;

pub use table::Fstab;
pub use types::error::{FstabError, Result};
pub use types::models::{Field, FstabEntry, MountOption, ParseOptions};

//! # Storage Layer
//!
//! [`RecordStore`] abstracts where dossiers live so the commands and the view
//! state machine can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one folder per dossier
//! - [`memory::InMemoryStore`]: in-memory storage for tests (`test_utils` feature)
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── Elliot_Alderson/
//! │   ├── profile.json    # every persisted field
//! │   ├── images/         # subfolders requested at creation, never read back
//! │   └── logs/
//! └── Tyrell_Wellick/
//!     └── profile.json
//! ```
//!
//! The folder name is the record's identity. It is derived from the name once,
//! at creation, and edits never move it.

use crate::error::Result;
use crate::model::{Profile, Record};

pub mod fs;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

pub const PROFILE_FILENAME: &str = "profile.json";

/// Abstract interface for dossier storage.
pub trait RecordStore {
    /// Every loadable record, ordered by folder name.
    ///
    /// Folders with a missing or malformed profile are skipped. Only a failure
    /// to prepare or read the root itself is returned as an error.
    fn load_all(&self) -> Result<Vec<Record>>;

    /// Creates the folder, its subfolders and the profile document.
    ///
    /// Fails with `AlreadyExists` instead of touching an existing folder.
    fn create(&mut self, name: &str, subfolders: &[String], profile: &Profile) -> Result<Record>;

    /// Rewrites the whole profile document of an existing record.
    fn save(&mut self, record: &Record, profile: &Profile) -> Result<Record>;
}

use super::RecordStore;
use crate::error::{DossierError, Result};
use crate::model::{
    folder_name_for, name_from_folder, validate_name, validate_segment, Profile, Record,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: BTreeMap<String, Record>,
    /// When set, every write fails as if the disk were full.
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(DossierError::Io(std::io::Error::other("simulated write failure")));
        }
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.values().cloned().collect())
    }

    fn create(&mut self, name: &str, subfolders: &[String], profile: &Profile) -> Result<Record> {
        let name = validate_name(name)?;
        for subfolder in subfolders {
            validate_segment(subfolder)?;
        }
        let folder_name = folder_name_for(name);
        if self.records.contains_key(&folder_name) {
            return Err(DossierError::AlreadyExists(folder_name));
        }
        self.check_writable()?;

        let record = Record {
            name: name_from_folder(&folder_name),
            profile: profile.clone(),
            storage_path: PathBuf::from("memory").join(&folder_name),
        };
        self.records.insert(folder_name, record.clone());
        Ok(record)
    }

    fn save(&mut self, record: &Record, profile: &Profile) -> Result<Record> {
        self.check_writable()?;
        let folder_name = record.folder_name();
        let slot = self.records.get_mut(&folder_name).ok_or_else(|| {
            DossierError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no dossier folder '{}'", folder_name),
            ))
        })?;
        slot.profile = profile.clone();
        Ok(Record {
            profile: profile.clone(),
            ..record.clone()
        })
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, names: &[&str]) -> Self {
            for name in names {
                let profile = Profile {
                    status: "active".to_string(),
                    notes: format!("Notes on {}", name),
                    ..Profile::default()
                };
                self.store.create(name, &[], &profile).unwrap();
            }
            self
        }
    }
}

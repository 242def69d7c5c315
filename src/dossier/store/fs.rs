use super::{RecordStore, PROFILE_FILENAME};
use crate::error::{DossierError, Result};
use crate::model::{
    folder_name_for, name_from_folder, validate_name, validate_segment, Profile, Record,
};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DossierError::Io)?;
        }
        Ok(())
    }

    fn read_record(&self, folder_path: &Path, folder_name: &str) -> Result<Record> {
        let profile_path = folder_path.join(PROFILE_FILENAME);
        let content =
            fs::read_to_string(&profile_path).map_err(|e| DossierError::MalformedRecord {
                path: profile_path.clone(),
                reason: e.to_string(),
            })?;
        let profile: Profile =
            serde_json::from_str(&content).map_err(|e| DossierError::MalformedRecord {
                path: profile_path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Record {
            name: name_from_folder(folder_name),
            profile,
            storage_path: folder_path.to_path_buf(),
        })
    }

    /// Writes through a temp file so a crash never leaves half a document.
    fn write_profile(&self, folder_path: &Path, profile: &Profile) -> Result<()> {
        let content = serde_json::to_string_pretty(profile).map_err(DossierError::Serialization)?;
        let tmp_path = folder_path.join(format!(".profile-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(DossierError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, folder_path.join(PROFILE_FILENAME)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DossierError::Io(e));
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Vec<Record>> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DossierError::Io)?;
            return Ok(Vec::new());
        }

        let mut folders: Vec<(String, PathBuf)> = fs::read_dir(&self.root)
            .map_err(DossierError::Io)?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    None
                }
            })
            .filter(|path| path.is_dir())
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some((name, path))
            })
            .collect();
        folders.sort_by(|a, b| a.0.cmp(&b.0));

        let mut records = Vec::with_capacity(folders.len());
        for (folder_name, path) in folders {
            match self.read_record(&path, &folder_name) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(folder = %folder_name, error = %e, "skipping dossier"),
            }
        }

        tracing::debug!(count = records.len(), root = %self.root.display(), "loaded dossiers");
        Ok(records)
    }

    fn create(&mut self, name: &str, subfolders: &[String], profile: &Profile) -> Result<Record> {
        let name = validate_name(name)?;
        for subfolder in subfolders {
            validate_segment(subfolder)?;
        }

        self.ensure_dir(&self.root)?;
        let folder_name = folder_name_for(name);
        let folder_path = self.root.join(&folder_name);

        // create_dir (not create_dir_all) so an existing folder is never reused.
        fs::create_dir(&folder_path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => DossierError::AlreadyExists(folder_name.clone()),
            _ => DossierError::Io(e),
        })?;

        for subfolder in subfolders {
            fs::create_dir_all(folder_path.join(subfolder)).map_err(DossierError::Io)?;
        }
        self.write_profile(&folder_path, profile)?;

        tracing::info!(folder = %folder_name, "created dossier");
        Ok(Record {
            name: name_from_folder(&folder_name),
            profile: profile.clone(),
            storage_path: folder_path,
        })
    }

    fn save(&mut self, record: &Record, profile: &Profile) -> Result<Record> {
        self.write_profile(&record.storage_path, profile)?;

        tracing::info!(folder = %record.folder_name(), "saved dossier");
        Ok(Record {
            profile: profile.clone(),
            ..record.clone()
        })
    }
}

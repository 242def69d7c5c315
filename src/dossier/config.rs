use crate::error::{DossierError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SUBFOLDERS: &str = "images, logs";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FILENAME: &str = "dossier.log";

/// Configuration for dossier, stored as config.json in the user's config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DossierConfig {
    /// Root holding one folder per dossier. Relative paths resolve against the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Pre-filled text of the creation form's Subfolders field.
    #[serde(default = "default_subfolders")]
    pub default_subfolders: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Defaults to `dossier.log` inside `data_dir`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_subfolders() -> String {
    DEFAULT_SUBFOLDERS.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_subfolders: default_subfolders(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl DossierConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DossierError::Io)?;
        let config: DossierConfig =
            serde_json::from_str(&content).map_err(DossierError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DossierError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(DossierError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(DossierError::Io)?;
        Ok(())
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_LOG_FILENAME))
    }
}

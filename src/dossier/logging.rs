//! File logging. The terminal belongs to the UI, so events go to the log file
//! named in [`DossierConfig`], never to stdout or stderr.

use crate::config::DossierConfig;
use crate::error::{DossierError, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. The filter comes from config only.
pub fn init(config: &DossierConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| DossierError::Config(format!("log_level '{}': {}", config.log_level, e)))?;

    let path = config.log_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| DossierError::Config(e.to_string()))?;

    tracing::info!(log = %path.display(), data_dir = %config.data_dir.display(), "dossier starting");
    Ok(())
}

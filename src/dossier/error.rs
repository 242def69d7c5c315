use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DossierError {
    #[error("A dossier folder named '{0}' already exists")]
    AlreadyExists(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    /// Only ever produced while loading; `load_all` logs and drops it.
    #[error("Malformed profile at {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DossierError>;

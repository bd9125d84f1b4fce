use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("sentinel default for '{field}' must not be empty")]
    EmptySentinel { field: &'static str },

    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

use awards_ingest::IngestError;
use awards_model::{Entity, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// A required identity column is absent under every known name.
    #[error("{entity} table has no '{column}' column (checked aliases: {aliases})")]
    MissingRequiredColumn {
        entity: Entity,
        column: String,
        aliases: String,
    },

    /// Strict boolean mode rejected a token. `row` is 1-based, excluding the header.
    #[error("{entity} row {row}: '{value}' in column '{column}' is not a boolean")]
    InvalidBoolean {
        entity: Entity,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{entity} natural key names unknown column '{column}'")]
    InvalidKeyColumn { entity: Entity, column: String },

    #[error("{entity} natural key must name at least one column")]
    EmptyKey { entity: Entity },
}

pub type Result<T> = std::result::Result<T, CleanError>;

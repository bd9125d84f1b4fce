use std::path::PathBuf;

use awards_core::CleanReport;
use awards_model::Entity;
use serde::Serialize;

/// Outcome of one `clean` or `run` invocation.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub dry_run: bool,
    pub entities: Vec<CleanReport>,
    pub failures: Vec<EntityFailure>,
}

/// A cleaner that did not complete. Other entities are unaffected.
#[derive(Debug, Serialize)]
pub struct EntityFailure {
    pub entity: Entity,
    pub input: PathBuf,
    pub message: String,
}

impl RunResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            entities: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}

//! Per-run cleaning statistics.

use std::path::PathBuf;

use awards_model::Entity;
use serde::Serialize;

use crate::reconcile::ColumnRename;

/// What happened to one output column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    /// Cells that received the sentinel default.
    pub defaulted: usize,
    /// Non-empty cells that did not parse.
    pub unparsed: usize,
    /// Text cells cut to the column's maximum length.
    pub truncated: usize,
    /// The source table lacked the column entirely.
    pub synthesized: bool,
}

impl ColumnStats {
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub entity: Entity,
    pub input_rows: usize,
    pub output_rows: usize,
    /// Rows dropped because a required identity field was empty.
    pub dropped_missing_required: usize,
    pub duplicates_removed: usize,
    pub renames: Vec<ColumnRename>,
    pub columns: Vec<ColumnStats>,
    /// Unrecognized source columns carried into the output.
    pub extra_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

impl CleanReport {
    pub fn new(entity: Entity, input_rows: usize) -> Self {
        Self {
            entity,
            input_rows,
            output_rows: 0,
            dropped_missing_required: 0,
            duplicates_removed: 0,
            renames: Vec::new(),
            columns: Vec::new(),
            extra_columns: Vec::new(),
            input: None,
            output: None,
            dry_run: false,
        }
    }

    /// Total cells that received a sentinel default, across all columns.
    pub fn values_defaulted(&self) -> usize {
        self.columns.iter().map(|stats| stats.defaulted).sum()
    }

    pub fn values_unparsed(&self) -> usize {
        self.columns.iter().map(|stats| stats.unparsed).sum()
    }

    pub fn synthesized_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|stats| stats.synthesized)
            .map(|stats| stats.column.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|stats| stats.column == name)
    }
}

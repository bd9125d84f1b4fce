//! Column name reconciliation.
//!
//! Scraper headers drift in capitalization and naming (`releasedate`,
//! `PersonFirstName`). A source column is renamed to its canonical name only
//! when the canonical name itself is absent, and only through the aliases a
//! [`ColumnSpec`] enumerates. Matching is case-sensitive.

use serde::Serialize;

use crate::policy::ColumnSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRename {
    /// Position of the source column.
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// Work out which source columns to rename.
///
/// For each spec whose canonical name is absent, the first alias present in
/// `headers` wins. A column already claimed by an earlier rename is not
/// renamed twice.
pub fn reconcile_columns(headers: &[String], schema: &[ColumnSpec]) -> Vec<ColumnRename> {
    let mut renames: Vec<ColumnRename> = Vec::new();
    for spec in schema {
        if headers.iter().any(|header| header == spec.name) {
            continue;
        }
        let found = spec.aliases.iter().find_map(|alias| {
            headers
                .iter()
                .position(|header| header == alias)
                .filter(|index| renames.iter().all(|rename| rename.index != *index))
        });
        if let Some(index) = found {
            renames.push(ColumnRename {
                index,
                from: headers[index].clone(),
                to: spec.name.to_string(),
            });
        }
    }
    renames
}

/// Headers with `renames` applied.
pub fn apply_renames(headers: &[String], renames: &[ColumnRename]) -> Vec<String> {
    let mut renamed = headers.to_vec();
    for rename in renames {
        if let Some(header) = renamed.get_mut(rename.index) {
            header.clone_from(&rename.to);
        }
    }
    renamed
}

//! Input file discovery.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use awards_model::Entity;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Match scraper outputs in `dir` to entities.
///
/// File stems are compared case-insensitively against each entity's scraper
/// file stem, so `Movie.csv` and `movie.csv` both feed the movie cleaner.
/// Previously cleaned outputs (`*_clean.csv`) never match. When two files map
/// to the same entity, the first in filename order wins.
pub fn discover_entity_files(dir: &Path) -> Result<BTreeMap<Entity, PathBuf>> {
    let mut found = BTreeMap::new();
    for path in list_csv_files(dir)? {
        let Some(stem) = path.file_stem().and_then(|v| v.to_str()) else {
            continue;
        };
        let entity = Entity::ALL
            .into_iter()
            .find(|entity| stem.eq_ignore_ascii_case(entity.file_stem()));
        match entity {
            Some(entity) => {
                if found.contains_key(&entity) {
                    tracing::warn!(
                        entity = %entity,
                        path = %path.display(),
                        "ignoring duplicate input file"
                    );
                } else {
                    found.insert(entity, path);
                }
            }
            None => tracing::debug!(path = %path.display(), "skipping unrecognized CSV file"),
        }
    }
    Ok(found)
}

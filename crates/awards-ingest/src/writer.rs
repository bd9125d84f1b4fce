//! Clean table output.

use std::io::Write;
use std::path::Path;

use awards_model::CleanTable;
use tempfile::NamedTempFile;

use crate::error::{IngestError, Result};

/// Render a clean table as CSV text: header row, then one line per row.
pub fn render_csv(table: &CleanTable) -> std::result::Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, table)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: Write>(
    writer: &mut csv::Writer<W>,
    table: &CleanTable,
) -> std::result::Result<(), csv::Error> {
    writer.write_record(&table.columns)?;
    for row in table.rendered_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a clean table to `path`.
///
/// The table is written to a temporary file in the destination directory and
/// renamed over `path`, so readers never see a partially written table.
pub fn write_csv_table(path: &Path, table: &CleanTable) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| IngestError::FileWrite {
        operation: "create directory",
        path: dir.to_path_buf(),
        source,
    })?;

    let temp = NamedTempFile::new_in(dir).map_err(|source| IngestError::FileWrite {
        operation: "create temporary file in",
        path: dir.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(temp);
    write_records(&mut writer, table).map_err(|err| IngestError::FileWrite {
        operation: "write",
        path: path.to_path_buf(),
        source: std::io::Error::other(err),
    })?;
    let temp = writer
        .into_inner()
        .map_err(|err| IngestError::FileWrite {
            operation: "flush",
            path: path.to_path_buf(),
            source: err.into_error(),
        })?;
    temp.as_file()
        .sync_all()
        .map_err(|source| IngestError::FileWrite {
            operation: "sync",
            path: path.to_path_buf(),
            source,
        })?;
    temp.persist(path)
        .map_err(|err| IngestError::AtomicWriteFailed {
            path: path.to_path_buf(),
            source: err.error,
        })?;

    tracing::debug!(path = %path.display(), rows = table.row_count(), "wrote clean table");
    Ok(())
}

//! Scraped CSV loading.
//!
//! The scraper writes one header row, but headers may carry stray
//! whitespace or a UTF-8 BOM, and rows may be shorter or longer than the
//! header. Cells are kept verbatim; trimming belongs to the cleaning policy.
//! Only truly empty lines are skipped.

use std::io::Read;
use std::path::Path;

use awards_model::RawTable;
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file into a raw table.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv(file).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded CSV table"
    );
    Ok(table)
}

/// Parse CSV text held in memory.
pub fn read_csv_str(text: &str) -> std::result::Result<RawTable, csv::Error> {
    read_csv(text.as_bytes())
}

fn read_csv<R: Read>(source: R) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(normalize_header).collect(),
        None => return Ok(RawTable::default()),
    };

    let mut rows = Vec::new();
    for record in records {
        // Empty lines never reach here; whitespace-only records are data.
        let record = record?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }
    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bom_and_whitespace_removed() {
        let table = read_csv_str("\u{feff}title , releasedate\nJaws,1975-06-20\n").unwrap();
        assert_eq!(table.headers, vec!["title", "releasedate"]);
    }

    #[test]
    fn test_ragged_rows_padded_and_truncated() {
        let table = read_csv_str("a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "", ""], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_whitespace_rows_kept_cells_verbatim() {
        let table = read_csv_str("a,b\n , \n\n  x ,y\n").unwrap();
        assert_eq!(table.rows, vec![vec![" ", " "], vec!["  x ", "y"]]);
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        let table = read_csv_str("").unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_quoted_commas_preserved() {
        let table = read_csv_str("title,budget\n\"Crouching Tiger, Hidden Dragon\",\"$17,000,000\"\n")
            .unwrap();
        assert_eq!(table.rows[0][0], "Crouching Tiger, Hidden Dragon");
        assert_eq!(table.rows[0][1], "$17,000,000");
    }
}

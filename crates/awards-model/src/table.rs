use crate::entity::Entity;
use crate::value::CleanValue;

/// A table as read from the scraper: string cells under named headers.
///
/// Rows are padded to the header width when loaded, so `rows[i].len()`
/// equals `headers.len()` for tables built by the CSV reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from string slices. Convenient in tests.
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell at `row`/`column`; ragged rows read as missing.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map(String::as_str)
    }
}

/// The output of one cleaner: canonical columns in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTable {
    pub entity: Entity,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CleanValue>>,
}

impl CleanTable {
    pub fn new(entity: Entity, columns: Vec<String>) -> Self {
        Self {
            entity,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&CleanValue> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|values| values.get(index))
    }

    /// All values of one column in row order.
    pub fn column_values(&self, column: &str) -> Option<Vec<&CleanValue>> {
        let index = self.column_index(column)?;
        Some(
            self.rows
                .iter()
                .filter_map(|values| values.get(index))
                .collect(),
        )
    }

    /// Rows rendered as the strings written to disk.
    pub fn rendered_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|values| values.iter().map(CleanValue::render).collect())
            .collect()
    }

    /// The clean table re-read as a raw table, as a later run would see it.
    pub fn to_raw(&self) -> RawTable {
        RawTable::new(self.columns.clone(), self.rendered_rows())
    }
}

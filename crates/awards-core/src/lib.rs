//! Entity cleaners for scraped award tables.
//!
//! Each cleaner is a pure function from one raw table to one clean table:
//! reconcile column names, clean every declared column according to its
//! [`ColumnSpec`], drop rows missing required identity fields, then drop
//! duplicates by natural key.

pub mod dedupe;
pub mod entities;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod reconcile;
pub mod report;

pub use dedupe::{DedupeOutcome, dedupe_rows};
pub use entities::{EntitySchema, natural_key};
pub use error::{CleanError, Result};
pub use pipeline::{CleanOutcome, EntityCleaner, default_output_path};
pub use policy::{CleanedColumn, ColumnKind, ColumnSpec, Missing, clean_column};
pub use reconcile::{ColumnRename, apply_renames, reconcile_columns};
pub use report::{CleanReport, ColumnStats};

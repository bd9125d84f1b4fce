//! Reading scraped CSV tables and writing clean ones.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod writer;

pub use csv_table::{read_csv_str, read_csv_table};
pub use discovery::{discover_entity_files, list_csv_files};
pub use error::{IngestError, Result};
pub use writer::{render_csv, write_csv_table};

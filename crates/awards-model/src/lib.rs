//! Data model for the awards cleaning pipeline.
//!
//! - **table**: raw (string-typed) and clean (typed) tables
//! - **value**: typed cell values and their rendering for the downstream loader
//! - **entity**: the six entity tables the pipeline knows about
//! - **options**: sentinel defaults and cleaner configuration

pub mod entity;
pub mod error;
pub mod options;
pub mod table;
pub mod value;

pub use entity::Entity;
pub use error::{ModelError, Result};
pub use options::{BooleanMode, CleanOptions, Defaults};
pub use table::{CleanTable, RawTable};
pub use value::CleanValue;

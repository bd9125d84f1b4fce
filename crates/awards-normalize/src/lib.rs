//! Normalization primitives for scraped award tables.
//!
//! Every parser here returns `None` when the input is absent, blank, or does
//! not match a recognized format. Callers decide what a miss means (a
//! sentinel default, an absent value, or a dropped row).
//!
//! - **date**: heterogeneous date strings to `YYYY-MM-DD`
//! - **money**: currency and magnitude-suffixed amounts to two-decimal values
//! - **numeric**: loose integers (run times, ceremony iterations)
//! - **boolean**: truthy/falsy tokens
//! - **text**: trimming, truncation, and the country allow-pattern

pub mod boolean;
pub mod date;
pub mod money;
pub mod numeric;
pub mod text;

pub use boolean::{normalize_bool, parse_bool_strict};
pub use date::{
    DATE_FORMATS, format_date, is_bare_year, normalize_birth_date, normalize_date,
};
pub use money::{normalize_money, round_cents};
pub use numeric::normalize_integer;
pub use text::{clean_country, is_valid_country, trim_cell, truncate_chars};

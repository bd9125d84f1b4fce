//! Typed cell values of a clean table.

use std::fmt;

use chrono::NaiveDate;

/// A cleaned cell.
///
/// Rendering follows what the database loader expects: dates as
/// `YYYY-MM-DD`, decimals with two places, integers without a decimal
/// point, booleans as `True`/`False`, and absent values as empty cells.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanValue {
    Text(String),
    Date(NaiveDate),
    Decimal(f64),
    Integer(i64),
    Bool(bool),
    Absent,
}

impl CleanValue {
    pub fn text(value: impl Into<String>) -> Self {
        CleanValue::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CleanValue::Absent)
    }

    /// True for absent values and empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            CleanValue::Absent => true,
            CleanValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CleanValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CleanValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanValue::Text(text) => f.write_str(text),
            CleanValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CleanValue::Decimal(value) => write!(f, "{value:.2}"),
            CleanValue::Integer(value) => write!(f, "{value}"),
            CleanValue::Bool(true) => f.write_str("True"),
            CleanValue::Bool(false) => f.write_str("False"),
            CleanValue::Absent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_loader_tokens() {
        let date = NaiveDate::from_ymd_opt(1980, 5, 16).unwrap();
        assert_eq!(CleanValue::Date(date).render(), "1980-05-16");
        assert_eq!(CleanValue::Decimal(1_200_000.0).render(), "1200000.00");
        assert_eq!(CleanValue::Decimal(19.5).render(), "19.50");
        assert_eq!(CleanValue::Integer(124).render(), "124");
        assert_eq!(CleanValue::Bool(true).render(), "True");
        assert_eq!(CleanValue::Bool(false).render(), "False");
        assert_eq!(CleanValue::Absent.render(), "");
        assert_eq!(CleanValue::text("Jaws").render(), "Jaws");
    }

    #[test]
    fn empty_covers_absent_and_blank_text() {
        assert!(CleanValue::Absent.is_empty());
        assert!(CleanValue::text("").is_empty());
        assert!(!CleanValue::text("x").is_empty());
        assert!(!CleanValue::Integer(0).is_empty());
        assert!(!CleanValue::Bool(false).is_empty());
    }
}

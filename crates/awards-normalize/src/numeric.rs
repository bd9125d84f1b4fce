//! Loose integer parsing.

/// Parse an integer column value such as a run time or ceremony iteration.
///
/// Decimal input is truncated toward zero (`"120.7"` reads as 120), so a
/// value that went through a float representation upstream still parses.
/// Text, blanks, and non-finite numbers are unparsed.
pub fn normalize_integer(raw: Option<&str>) -> Option<i64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

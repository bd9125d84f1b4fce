//! Date parsing to the canonical `YYYY-MM-DD` form.
//!
//! Scraped dates arrive as ISO dates, day-first month names ("16 May 1980",
//! "16 Jan 1980") or slash dates. Slash dates are ambiguous when both parts
//! are 12 or less; the day-first reading is tried first and wins.

use chrono::NaiveDate;

/// Formats tried in order. The first one that consumes the whole input wins.
pub const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d", // 1980-05-16
    "%d %B %Y", // 16 May 1980
    "%d %b %Y", // 16 Jan 1980
    "%d/%m/%Y", // 16/05/1980
    "%m/%d/%Y", // 05/16/1980
];

/// Parse a date using the fixed format order.
///
/// Returns `None` for absent, blank, or unrecognized input.
pub fn normalize_date(raw: Option<&str>) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .filter(|format| is_bare_year(year_token(trimmed, format)))
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// The part of `value` that `format` reads as the year.
///
/// chrono's `%Y` accepts one to four digits, so `16/05/80` would otherwise
/// parse as year 80.
fn year_token<'a>(value: &'a str, format: &str) -> &'a str {
    if format.starts_with("%Y") {
        value.split('-').next().unwrap_or("")
    } else {
        value.rsplit([' ', '/']).next().unwrap_or("")
    }
}

/// Parse a birth date.
///
/// A bare four-digit year is too imprecise to keep and maps straight to
/// `fallback` instead of being read as January 1st.
pub fn normalize_birth_date(raw: Option<&str>, fallback: NaiveDate) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    if is_bare_year(trimmed) {
        return Some(fallback);
    }
    normalize_date(Some(trimmed))
}

/// True for exactly four ASCII digits.
pub fn is_bare_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_every_supported_format() {
        assert_eq!(normalize_date(Some("1980-05-16")), Some(ymd(1980, 5, 16)));
        assert_eq!(normalize_date(Some("16 May 1980")), Some(ymd(1980, 5, 16)));
        assert_eq!(
            normalize_date(Some("16 September 1980")),
            Some(ymd(1980, 9, 16))
        );
        assert_eq!(normalize_date(Some("16 Sep 1980")), Some(ymd(1980, 9, 16)));
        assert_eq!(normalize_date(Some("16/05/1980")), Some(ymd(1980, 5, 16)));
        assert_eq!(normalize_date(Some("05/16/1980")), Some(ymd(1980, 5, 16)));
    }

    #[test]
    fn trims_before_parsing() {
        assert_eq!(normalize_date(Some("  1980-05-16 ")), Some(ymd(1980, 5, 16)));
    }

    #[test]
    fn blank_and_absent_are_unparsed() {
        assert_eq!(normalize_date(None), None);
        assert_eq!(normalize_date(Some("")), None);
        assert_eq!(normalize_date(Some("   ")), None);
    }

    #[test]
    fn partial_and_garbage_are_unparsed() {
        assert_eq!(normalize_date(Some("May 1980")), None);
        assert_eq!(normalize_date(Some("1980")), None);
        assert_eq!(normalize_date(Some("1980-05-16 (age 44)")), None);
        assert_eq!(normalize_date(Some("2023-02-30")), None);
        assert_eq!(normalize_date(Some("unknown")), None);
    }

    #[test]
    fn short_years_are_unparsed() {
        assert_eq!(normalize_date(Some("16/05/80")), None);
        assert_eq!(normalize_date(Some("05/16/80")), None);
        assert_eq!(normalize_date(Some("16 May 80")), None);
        assert_eq!(normalize_date(Some("16 May 980")), None);
        assert_eq!(normalize_date(Some("16 Jan 980")), None);
        assert_eq!(normalize_date(Some("80-05-16")), None);
        assert_eq!(normalize_date(Some("980-05-16")), None);
        assert_eq!(normalize_date(Some("0980-05-16")), Some(ymd(980, 5, 16)));
    }

    #[test]
    fn short_birth_year_is_not_a_date() {
        let fallback = ymd(1999, 9, 19);
        assert_eq!(normalize_birth_date(Some("16 May 75"), fallback), None);
    }

    #[test]
    fn ambiguous_slash_dates_read_day_first() {
        // 03/04/1990 could be 3 April or March 4; day-first wins.
        assert_eq!(normalize_date(Some("03/04/1990")), Some(ymd(1990, 4, 3)));
        // Only month-first is valid when the first part exceeds 12.
        assert_eq!(normalize_date(Some("04/23/1990")), Some(ymd(1990, 4, 23)));
    }

    #[test]
    fn birth_date_bare_year_uses_fallback() {
        let fallback = ymd(1999, 9, 19);
        assert_eq!(normalize_birth_date(Some("1975"), fallback), Some(fallback));
        assert_eq!(
            normalize_birth_date(Some(" 1975 "), fallback),
            Some(fallback)
        );
        assert_eq!(
            normalize_birth_date(Some("12 March 1975"), fallback),
            Some(ymd(1975, 3, 12))
        );
        assert_eq!(normalize_birth_date(Some("circa 1975"), fallback), None);
        assert_eq!(normalize_birth_date(None, fallback), None);
    }

    #[test]
    fn bare_year_requires_four_ascii_digits() {
        assert!(is_bare_year("1975"));
        assert!(!is_bare_year("975"));
        assert!(!is_bare_year("19755"));
        assert!(!is_bare_year("19a5"));
    }

    #[test]
    fn formats_canonically() {
        assert_eq!(format_date(ymd(1905, 1, 2)), "1905-01-02");
    }
}

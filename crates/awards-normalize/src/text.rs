//! Text cell helpers.

use std::sync::LazyLock;

use regex::Regex;

static COUNTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\-]+$").expect("Invalid country regex"));

/// Trim surrounding whitespace.
pub fn trim_cell(raw: Option<&str>) -> &str {
    raw.map(str::trim).unwrap_or("")
}

/// Keep at most `max_chars` characters.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value.to_string(),
    }
}

/// Countries are letters, whitespace, and hyphens only.
pub fn is_valid_country(value: &str) -> bool {
    COUNTRY_PATTERN.is_match(value)
}

/// Trimmed country name, or an empty string when it fails the allow-pattern
/// (footnote markers, digits, stray punctuation from the scrape).
pub fn clean_country(raw: Option<&str>) -> String {
    let trimmed = trim_cell(raw);
    if is_valid_country(trimmed) {
        trimmed.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_handles_absent() {
        assert_eq!(trim_cell(Some("  Jaws \t")), "Jaws");
        assert_eq!(trim_cell(None), "");
    }

    #[test]
    fn truncates_by_character_not_byte() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("Amélie", 3), "Amé");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn country_allow_pattern() {
        assert_eq!(clean_country(Some(" United States ")), "United States");
        assert_eq!(clean_country(Some("Guinea-Bissau")), "Guinea-Bissau");
        assert_eq!(clean_country(Some("France[1]")), "");
        assert_eq!(clean_country(Some("U.S.")), "");
        assert_eq!(clean_country(Some("1999")), "");
        assert_eq!(clean_country(Some("")), "");
        assert_eq!(clean_country(None), "");
    }
}

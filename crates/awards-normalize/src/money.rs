//! Budget and box office amounts.
//!
//! Scraped amounts look like `$1.2 million`, `€ 3,500,000`, `£2 billion` or
//! `1,000,000 USD`. Values are rounded to cents.

use std::sync::LazyLock;

use regex::Regex;

static MILLION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)million").expect("Invalid million regex"));
static BILLION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)billion").expect("Invalid billion regex"));

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Parse a currency amount.
///
/// "million" is checked before "billion", so an amount mentioning both only
/// gets the million multiplier. Any remaining letters (unit words such as
/// `USD`) and thousands separators are dropped before parsing.
pub fn normalize_money(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let without_symbols: String = raw
        .chars()
        .filter(|ch| !CURRENCY_SYMBOLS.contains(ch))
        .collect();
    let mut value = without_symbols.trim().to_string();

    let mut multiplier = 1.0;
    if MILLION.is_match(&value) {
        multiplier = 1e6;
        value = MILLION.replace_all(&value, "").into_owned();
    } else if BILLION.is_match(&value) {
        multiplier = 1e9;
        value = BILLION.replace_all(&value, "").into_owned();
    }

    let digits: String = value
        .chars()
        .filter(|ch| !ch.is_ascii_alphabetic() && *ch != ',')
        .collect();
    let number: f64 = digits.trim().parse().ok()?;
    let amount = round_cents(number * multiplier);
    amount.is_finite().then_some(amount)
}

/// Round to two decimal places.
///
/// Rounds the exact binary value, ties to even: `0.125` is a true tie and
/// becomes `0.12`, while `2.675` is stored just below the tie and becomes
/// `2.67`. Scaling by 100 first would round both up.
pub fn round_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_magnitude_words() {
        assert_eq!(normalize_money(Some("$1.2 million")), Some(1_200_000.0));
        assert_eq!(normalize_money(Some("$1.2 Million")), Some(1_200_000.0));
        assert_eq!(normalize_money(Some("£2 billion")), Some(2_000_000_000.0));
        assert_eq!(normalize_money(Some("3 MILLION")), Some(3_000_000.0));
    }

    #[test]
    fn strips_symbols_separators_and_units() {
        assert_eq!(normalize_money(Some("€ 3,500,000")), Some(3_500_000.0));
        assert_eq!(normalize_money(Some("1,000,000 USD")), Some(1_000_000.0));
        assert_eq!(normalize_money(Some("  $250  ")), Some(250.0));
    }

    #[test]
    fn million_wins_over_billion() {
        assert_eq!(
            normalize_money(Some("1 million billion")),
            Some(1_000_000.0)
        );
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(normalize_money(Some("19.999")), Some(20.0));
        assert_eq!(normalize_money(Some("0.125 million")), Some(125_000.0));
        assert_eq!(normalize_money(Some("12.344")), Some(12.34));
    }

    #[test]
    fn cent_ties_round_to_even() {
        assert_eq!(round_cents(0.125), 0.12);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(-0.125), -0.12);
        assert_eq!(normalize_money(Some("$0.125")), Some(0.12));
    }

    #[test]
    fn unparseable_amounts_are_unparsed() {
        assert_eq!(normalize_money(None), None);
        assert_eq!(normalize_money(Some("")), None);
        assert_eq!(normalize_money(Some("unknown")), None);
        assert_eq!(normalize_money(Some("$1.2–1.5 million")), None);
        assert_eq!(normalize_money(Some("$10 million[1]")), None);
    }

    #[test]
    fn already_clean_amounts_are_stable() {
        assert_eq!(normalize_money(Some("1200000.00")), Some(1_200_000.0));
    }
}

//! Natural-key deduplication.

use std::collections::BTreeSet;

use awards_model::CleanValue;

#[derive(Debug, Clone, PartialEq)]
pub struct DedupeOutcome {
    pub rows: Vec<Vec<CleanValue>>,
    pub removed: usize,
}

/// Keep the first row of each natural key, in input order.
///
/// Keys compare the rendered values, so two cells are equal exactly when
/// they would be written identically.
pub fn dedupe_rows(rows: Vec<Vec<CleanValue>>, key_indices: &[usize]) -> DedupeOutcome {
    let mut seen = BTreeSet::new();
    let total = rows.len();
    let kept: Vec<Vec<CleanValue>> = rows
        .into_iter()
        .filter(|row| {
            let composite: Vec<String> = key_indices
                .iter()
                .map(|&idx| row.get(idx).map(CleanValue::render).unwrap_or_default())
                .collect();
            seen.insert(composite)
        })
        .collect();
    let removed = total - kept.len();
    DedupeOutcome {
        rows: kept,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<CleanValue> {
        values.iter().map(|v| CleanValue::text(*v)).collect()
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let rows = vec![
            row(&["Jaws", "1975", "a"]),
            row(&["Alien", "1979", "b"]),
            row(&["Jaws", "1975", "c"]),
            row(&["Jaws", "1976", "d"]),
        ];
        let outcome = dedupe_rows(rows, &[0, 1]);
        assert_eq!(outcome.removed, 1);
        let tags: Vec<_> = outcome.rows.iter().map(|r| r[2].render()).collect();
        assert_eq!(tags, vec!["a", "b", "d"]);
    }

    #[test]
    fn compares_rendered_values() {
        let rows = vec![
            vec![CleanValue::Decimal(1.0)],
            vec![CleanValue::Decimal(1.001)],
            vec![CleanValue::text("1.00")],
        ];
        let outcome = dedupe_rows(rows, &[0]);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.removed, 2);
    }

    #[test]
    fn empty_input() {
        let outcome = dedupe_rows(Vec::new(), &[0]);
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.removed, 0);
    }
}

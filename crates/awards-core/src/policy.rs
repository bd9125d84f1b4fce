//! Per-column defaulting and trimming policy.
//!
//! Every output column is described by a [`ColumnSpec`]. Cleaning one column
//! runs the same steps for every cell:
//!
//! 1. an absent source column is synthesized, every cell missing
//! 2. trim surrounding whitespace
//! 3. parse according to [`ColumnKind`]; a failed parse counts as empty
//! 4. resolve empty cells through [`Missing`]
//! 5. truncate text to `max_len` characters, dropping whitespace left at the cut

use awards_model::{BooleanMode, CleanValue, Entity, RawTable};
use awards_normalize::{
    is_bare_year, is_valid_country, normalize_bool, normalize_date, normalize_integer,
    normalize_money, parse_bool_strict, truncate_chars,
};
use chrono::NaiveDate;

use crate::error::{CleanError, Result};
use crate::report::ColumnStats;

/// How a column's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    /// Trimmed text; empty is missing.
    Text,
    /// Trimmed text matching the country allow-pattern; anything else is missing.
    Country,
    Date,
    /// A date where a bare four-digit year resolves to the given fallback.
    BirthDate(NaiveDate),
    /// Currency amount rounded to cents.
    Money,
    Integer,
    Boolean,
}

/// What an empty or unparseable cell becomes.
#[derive(Debug, Clone, PartialEq)]
pub enum Missing {
    /// Substitute a sentinel.
    Default(CleanValue),
    /// Leave the cell empty in the output.
    Absent,
    /// The field is a required identity; drop the whole row.
    DropRow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Canonical output name.
    pub name: &'static str,
    /// Source names renamed to `name` when it is not present, tried in order.
    pub aliases: &'static [&'static str],
    pub kind: ColumnKind,
    pub missing: Missing,
    /// Maximum length in characters, applied after defaulting.
    pub max_len: Option<usize>,
}

impl ColumnSpec {
    pub fn new(name: &'static str, kind: ColumnKind, missing: Missing) -> Self {
        Self {
            name,
            aliases: &[],
            kind,
            missing,
            max_len: None,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Text column defaulting to `value`.
    pub fn text(name: &'static str, value: &str) -> Self {
        Self::new(name, ColumnKind::Text, Missing::Default(CleanValue::text(value)))
    }

    /// Date column defaulting to `date`.
    pub fn date(name: &'static str, date: NaiveDate) -> Self {
        Self::new(name, ColumnKind::Date, Missing::Default(CleanValue::Date(date)))
    }

    /// Required text column; rows without it are dropped.
    pub fn required(name: &'static str) -> Self {
        Self::new(name, ColumnKind::Text, Missing::DropRow)
    }

    pub fn is_required(&self) -> bool {
        matches!(self.missing, Missing::DropRow)
    }
}

/// The cleaned cells of one column.
///
/// `None` marks a row that must be dropped because a required field is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedColumn {
    pub values: Vec<Option<CleanValue>>,
    pub stats: ColumnStats,
}

/// Clean one column of `raw`.
///
/// `source` is the index of the (already reconciled) source column, or `None`
/// when the table does not carry it at all. Required columns must be present;
/// the pipeline rejects tables that lack them before getting here.
pub fn clean_column(
    entity: Entity,
    spec: &ColumnSpec,
    raw: &RawTable,
    source: Option<usize>,
    boolean_mode: BooleanMode,
) -> Result<CleanedColumn> {
    let mut stats = ColumnStats::new(spec.name);
    let mut values = Vec::with_capacity(raw.row_count());

    let Some(index) = source else {
        stats.synthesized = true;
        tracing::debug!(entity = %entity, column = spec.name, "synthesizing missing column");
        for _ in 0..raw.row_count() {
            values.push(resolve_missing(spec, &mut stats));
        }
        return Ok(CleanedColumn { values, stats });
    };

    for row in 0..raw.row_count() {
        let trimmed = raw.cell(row, index).unwrap_or("").trim();
        let parsed = parse_cell(entity, spec, trimmed, row, boolean_mode, &mut stats)?;
        let value = match parsed {
            Some(value) => Some(value),
            None => {
                if !trimmed.is_empty() {
                    stats.unparsed += 1;
                    tracing::trace!(
                        entity = %entity,
                        column = spec.name,
                        row = row + 1,
                        value = trimmed,
                        "unparseable value"
                    );
                }
                resolve_missing(spec, &mut stats)
            }
        };
        values.push(value.map(|value| truncate(spec, value, &mut stats)));
    }

    Ok(CleanedColumn { values, stats })
}

fn parse_cell(
    entity: Entity,
    spec: &ColumnSpec,
    trimmed: &str,
    row: usize,
    boolean_mode: BooleanMode,
    stats: &mut ColumnStats,
) -> Result<Option<CleanValue>> {
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = match spec.kind {
        ColumnKind::Text => Some(CleanValue::text(trimmed)),
        ColumnKind::Country => {
            is_valid_country(trimmed).then(|| CleanValue::text(trimmed))
        }
        ColumnKind::Date => normalize_date(Some(trimmed)).map(CleanValue::Date),
        ColumnKind::BirthDate(fallback) => {
            if is_bare_year(trimmed) {
                stats.defaulted += 1;
                tracing::trace!(
                    entity = %entity,
                    column = spec.name,
                    row = row + 1,
                    value = trimmed,
                    "bare birth year replaced by fallback date"
                );
                Some(CleanValue::Date(fallback))
            } else {
                normalize_date(Some(trimmed)).map(CleanValue::Date)
            }
        }
        ColumnKind::Money => normalize_money(Some(trimmed)).map(CleanValue::Decimal),
        ColumnKind::Integer => normalize_integer(Some(trimmed)).map(CleanValue::Integer),
        ColumnKind::Boolean => match boolean_mode {
            BooleanMode::Lenient => Some(CleanValue::Bool(normalize_bool(Some(trimmed)))),
            BooleanMode::Strict => match parse_bool_strict(Some(trimmed)) {
                Some(flag) => Some(CleanValue::Bool(flag)),
                None => {
                    tracing::warn!(
                        entity = %entity,
                        column = spec.name,
                        row = row + 1,
                        value = trimmed,
                        "rejecting unrecognized boolean"
                    );
                    return Err(CleanError::InvalidBoolean {
                        entity,
                        row: row + 1,
                        column: spec.name.to_string(),
                        value: trimmed.to_string(),
                    });
                }
            },
        },
    };
    Ok(value)
}

fn resolve_missing(spec: &ColumnSpec, stats: &mut ColumnStats) -> Option<CleanValue> {
    match &spec.missing {
        Missing::Default(value) => {
            stats.defaulted += 1;
            Some(value.clone())
        }
        Missing::Absent => Some(CleanValue::Absent),
        Missing::DropRow => None,
    }
}

fn truncate(spec: &ColumnSpec, value: CleanValue, stats: &mut ColumnStats) -> CleanValue {
    match (spec.max_len, value) {
        (Some(max_len), CleanValue::Text(text)) if text.chars().count() > max_len => {
            stats.truncated += 1;
            // Re-trim so a cut at a space cleans to the same value next run.
            CleanValue::text(truncate_chars(&text, max_len).trim_end())
        }
        (_, value) => value,
    }
}

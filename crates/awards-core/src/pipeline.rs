//! The cleaner shared by every entity.

use std::path::{Path, PathBuf};

use awards_ingest::{read_csv_table, write_csv_table};
use awards_model::{BooleanMode, CleanOptions, CleanTable, CleanValue, Entity, RawTable};
use tracing::{debug, info, info_span, trace};

use crate::dedupe::dedupe_rows;
use crate::entities::{EntitySchema, natural_key};
use crate::error::{CleanError, Result};
use crate::policy::clean_column;
use crate::reconcile::{apply_renames, reconcile_columns};
use crate::report::CleanReport;

#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub table: CleanTable,
    pub report: CleanReport,
}

/// Cleans raw tables of one entity.
#[derive(Debug, Clone)]
pub struct EntityCleaner {
    schema: EntitySchema,
    key: Vec<String>,
    key_indices: Vec<usize>,
    boolean_mode: BooleanMode,
    keep_extra_columns: bool,
}

impl EntityCleaner {
    /// Build the cleaner for `entity`.
    ///
    /// Fails when the options carry an empty sentinel or a natural key override
    /// naming a column the entity does not have.
    pub fn new(entity: Entity, options: &CleanOptions) -> Result<Self> {
        options.validate()?;
        let schema = EntitySchema::for_entity(entity, &options.defaults);
        let key: Vec<String> = match options.key_override(entity) {
            Some(columns) => columns.to_vec(),
            None => natural_key(entity)
                .iter()
                .map(|column| (*column).to_string())
                .collect(),
        };
        if key.is_empty() {
            return Err(CleanError::EmptyKey { entity });
        }
        let key_indices = key
            .iter()
            .map(|column| {
                schema
                    .position(column)
                    .ok_or_else(|| CleanError::InvalidKeyColumn {
                        entity,
                        column: column.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            schema,
            key,
            key_indices,
            boolean_mode: options.boolean_mode,
            keep_extra_columns: options.keep_extra_columns,
        })
    }

    pub fn entity(&self) -> Entity {
        self.schema.entity
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    /// Natural key columns used for deduplication.
    pub fn key(&self) -> &[String] {
        &self.key
    }

    /// Clean one raw table.
    pub fn clean(&self, raw: &RawTable) -> Result<CleanOutcome> {
        let entity = self.entity();
        let span = info_span!("entity", entity = %entity);
        let _guard = span.enter();

        let renames = reconcile_columns(&raw.headers, &self.schema.columns);
        for rename in &renames {
            debug!(from = %rename.from, to = %rename.to, "renamed column");
        }
        let headers = apply_renames(&raw.headers, &renames);

        for spec in self.schema.required() {
            if !headers.iter().any(|header| header == spec.name) {
                return Err(CleanError::MissingRequiredColumn {
                    entity,
                    column: spec.name.to_string(),
                    aliases: if spec.aliases.is_empty() {
                        "none".to_string()
                    } else {
                        spec.aliases.join(", ")
                    },
                });
            }
        }

        let mut report = CleanReport::new(entity, raw.row_count());
        let mut columns = Vec::with_capacity(self.schema.columns.len());
        for spec in &self.schema.columns {
            let source = headers.iter().position(|header| header == spec.name);
            let cleaned = clean_column(entity, spec, raw, source, self.boolean_mode)?;
            report.columns.push(cleaned.stats);
            columns.push(cleaned.values.into_iter());
        }

        let extra_indices: Vec<usize> = if self.keep_extra_columns {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| self.schema.position(header).is_none())
                .map(|(idx, _)| idx)
                .collect()
        } else {
            Vec::new()
        };
        report.extra_columns = extra_indices
            .iter()
            .map(|&idx| headers[idx].clone())
            .collect();

        let mut rows = Vec::with_capacity(raw.row_count());
        for row in 0..raw.row_count() {
            // Advance every column before checking, so columns stay aligned.
            let cells: Vec<Option<CleanValue>> = columns
                .iter_mut()
                .map(|column| column.next().unwrap_or(None))
                .collect();
            let Some(mut values) = cells.into_iter().collect::<Option<Vec<_>>>() else {
                report.dropped_missing_required += 1;
                trace!(row = row + 1, "dropping row with empty required field");
                continue;
            };
            for &idx in &extra_indices {
                values.push(CleanValue::text(raw.cell(row, idx).unwrap_or("").trim()));
            }
            rows.push(values);
        }

        let deduped = dedupe_rows(rows, &self.key_indices);
        report.duplicates_removed = deduped.removed;
        report.output_rows = deduped.rows.len();
        report.renames = renames;

        let mut output_columns: Vec<String> = self
            .schema
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        output_columns.extend(report.extra_columns.iter().cloned());
        let mut table = CleanTable::new(entity, output_columns);
        table.rows = deduped.rows;

        info!(
            input_rows = report.input_rows,
            output_rows = report.output_rows,
            dropped = report.dropped_missing_required,
            duplicates = report.duplicates_removed,
            defaulted = report.values_defaulted(),
            "cleaned table"
        );
        Ok(CleanOutcome { table, report })
    }

    /// Read `input`, clean it, and write the result to `output` unless `dry_run`.
    pub fn clean_file(&self, input: &Path, output: &Path, dry_run: bool) -> Result<CleanOutcome> {
        let raw = read_csv_table(input)?;
        let mut outcome = self.clean(&raw)?;
        outcome.report.input = Some(input.to_path_buf());
        outcome.report.dry_run = dry_run;
        if dry_run {
            info!(entity = %self.entity(), output = %output.display(), "dry run, not writing");
        } else {
            write_csv_table(output, &outcome.table)?;
            outcome.report.output = Some(output.to_path_buf());
            info!(entity = %self.entity(), output = %output.display(), "wrote clean table");
        }
        Ok(outcome)
    }
}

/// `<stem>_clean.csv` next to `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_clean.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_beside_input() {
        assert_eq!(
            default_output_path(Path::new("/data/movie.csv")),
            PathBuf::from("/data/movie_clean.csv")
        );
        assert_eq!(
            default_output_path(Path::new("Person.csv")),
            PathBuf::from("Person_clean.csv")
        );
    }

    #[test]
    fn key_override_must_name_schema_columns() {
        let options = CleanOptions::new().with_key(Entity::Movie, &["title", "studio"]);
        let err = EntityCleaner::new(Entity::Movie, &options).unwrap_err();
        assert!(
            matches!(err, CleanError::InvalidKeyColumn { ref column, .. } if column == "studio")
        );
    }

    #[test]
    fn empty_key_override_is_rejected() {
        let options = CleanOptions::new().with_key(Entity::Movie, &[]);
        let err = EntityCleaner::new(Entity::Movie, &options).unwrap_err();
        assert!(matches!(err, CleanError::EmptyKey { entity: Entity::Movie }));
    }

    #[test]
    fn key_override_replaces_natural_key() {
        let options = CleanOptions::new().with_key(
            Entity::FinalAcademyNomination,
            &["personFirstName", "personLastName", "category", "iteration"],
        );
        let cleaner = EntityCleaner::new(Entity::FinalAcademyNomination, &options).unwrap();
        assert_eq!(cleaner.key().len(), 4);
        assert_eq!(cleaner.key_indices, vec![0, 1, 5, 6]);
    }
}

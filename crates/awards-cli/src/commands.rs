use std::path::Path;

use anyhow::{Context, Result};
use awards_core::{EntityCleaner, EntitySchema, default_output_path};
use awards_ingest::discover_entity_files;
use awards_model::{BooleanMode, CleanOptions, Entity};
use comfy_table::Table;
use tracing::{error, info, info_span, warn};

use crate::cli::{CleanArgs, RunArgs};
use crate::summary::apply_table_style;
use crate::types::{EntityFailure, RunResult};

/// Load cleaner options from an optional TOML file, then apply CLI overrides.
pub fn load_options(
    config: Option<&Path>,
    strict_booleans: bool,
    keep_extra_columns: bool,
) -> Result<CleanOptions> {
    let mut options = match config {
        Some(path) => CleanOptions::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => CleanOptions::default(),
    };
    if strict_booleans {
        options.boolean_mode = BooleanMode::Strict;
    }
    if keep_extra_columns {
        options.keep_extra_columns = true;
    }
    Ok(options)
}

pub fn run_clean(args: &CleanArgs, options: &CleanOptions, dry_run: bool) -> Result<RunResult> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let cleaner = EntityCleaner::new(args.entity, options)
        .with_context(|| format!("configure {} cleaner", args.entity))?;
    let outcome = cleaner
        .clean_file(&args.input, &output, dry_run)
        .with_context(|| format!("clean {} from {}", args.entity, args.input.display()))?;
    let mut result = RunResult::new(dry_run);
    result.entities.push(outcome.report);
    Ok(result)
}

/// Clean every entity table discovered in the input directory.
///
/// Entities are independent: a failing cleaner is recorded and the run
/// continues with the next one.
pub fn run_all(args: &RunArgs, options: &CleanOptions, dry_run: bool) -> Result<RunResult> {
    let run_span = info_span!("run", input_dir = %args.input_dir.display());
    let _run_guard = run_span.enter();

    let files = discover_entity_files(&args.input_dir)
        .with_context(|| format!("discover inputs in {}", args.input_dir.display()))?;
    if files.is_empty() {
        warn!("no entity tables found");
    }
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.clone());

    let mut result = RunResult::new(dry_run);
    for (entity, input) in files {
        let output = output_dir.join(entity.output_file_name());
        let outcome = EntityCleaner::new(entity, options)
            .and_then(|cleaner| cleaner.clean_file(&input, &output, dry_run));
        match outcome {
            Ok(outcome) => result.entities.push(outcome.report),
            Err(err) => {
                error!(entity = %entity, input = %input.display(), error = %err, "cleaner failed");
                result.failures.push(EntityFailure {
                    entity,
                    input,
                    message: err.to_string(),
                });
            }
        }
    }
    info!(
        cleaned = result.entities.len(),
        failed = result.failures.len(),
        "run complete"
    );
    Ok(result)
}

/// Print every entity with its scraper file, output columns, and natural key.
pub fn run_entities(options: &CleanOptions) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Entity", "Input", "Columns", "Natural key"]);
    apply_table_style(&mut table);
    for entity in Entity::ALL {
        let cleaner = EntityCleaner::new(entity, options)
            .with_context(|| format!("configure {entity} cleaner"))?;
        table.add_row(vec![
            entity.to_string(),
            entity.input_file_name(),
            describe_columns(cleaner.schema()),
            cleaner.key().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn describe_columns(schema: &EntitySchema) -> String {
    schema
        .columns
        .iter()
        .map(|spec| {
            if spec.is_required() {
                format!("{}*", spec.name)
            } else {
                spec.name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the JSON run report.
pub fn write_report(path: &Path, result: &RunResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}

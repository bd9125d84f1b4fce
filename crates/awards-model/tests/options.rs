//! Tests for loading cleaner options from TOML.

use std::fs;

use awards_model::{BooleanMode, CleanOptions, Defaults, Entity, ModelError};

#[test]
fn empty_config_yields_defaults() {
    let options = CleanOptions::from_toml_str("").expect("parse empty config");
    assert_eq!(options, CleanOptions::default());
}

#[test]
fn partial_defaults_keep_remaining_sentinels() {
    let options = CleanOptions::from_toml_str(
        r#"
boolean_mode = "strict"

[defaults]
date = "2000-01-01"
category = "Uncategorized"
"#,
    )
    .expect("parse config");

    assert_eq!(options.boolean_mode, BooleanMode::Strict);
    assert_eq!(options.defaults.date.to_string(), "2000-01-01");
    assert_eq!(options.defaults.category, "Uncategorized");
    assert_eq!(options.defaults.role, Defaults::default().role);
    assert!(!options.keep_extra_columns);
}

#[test]
fn key_overrides_are_looked_up_by_entity() {
    let options = CleanOptions::from_toml_str(
        r#"
[keys]
final_academy_nomination = ["personFirstName", "personLastName", "category", "iteration"]
"#,
    )
    .expect("parse config");

    let key = options
        .key_override(Entity::FinalAcademyNomination)
        .expect("override present");
    assert_eq!(key.len(), 4);
    assert_eq!(key[3], "iteration");
}

#[test]
fn unknown_entity_in_keys_is_rejected() {
    let err = CleanOptions::from_toml_str(
        r#"
[keys]
studio = ["name"]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnknownEntity(name) if name == "studio"));
}

#[test]
fn invalid_date_sentinel_is_a_parse_error() {
    let err = CleanOptions::from_toml_str(
        r#"
[defaults]
date = "19/09/1999"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::Toml(_)));
}

#[test]
fn load_reports_missing_file_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.toml");
    let err = CleanOptions::load(&path).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));

    let present = dir.path().join("clean.toml");
    fs::write(&present, "keep_extra_columns = true\n").expect("write config");
    let options = CleanOptions::load(&present).expect("load config");
    assert!(options.keep_extra_columns);
}

#[test]
fn options_serialize_to_json() {
    let options = CleanOptions::default();
    let json = serde_json::to_value(&options).expect("serialize options");
    assert_eq!(json["boolean_mode"], "lenient");
    assert_eq!(json["defaults"]["date"], "1999-09-19");
}

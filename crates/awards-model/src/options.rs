//! Configuration options for the cleaners.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{ModelError, Result};

/// How unrecognized boolean tokens are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanMode {
    /// Unrecognized tokens become `false`.
    #[default]
    Lenient,
    /// Unrecognized non-empty tokens abort the cleaner.
    Strict,
}

/// Sentinel values substituted for missing or unparseable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    /// Movie title in the credit and nomination tables.
    pub movie_title: String,
    /// Movie title in the country and production company tables.
    pub title: String,
    pub country: String,
    pub production_company: String,
    pub role: String,
    pub category: String,
    pub iteration: i64,
    pub run_time: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(1999, 9, 19).unwrap_or_default(),
            first_name: "UnknownFirst".to_string(),
            last_name: "UnknownLast".to_string(),
            movie_title: "UnknownMovie".to_string(),
            title: "UnknownTitle".to_string(),
            country: "UnknownCountry".to_string(),
            production_company: "UnknownProductionCompany".to_string(),
            role: "UnknownRole".to_string(),
            category: "UnknownCategory".to_string(),
            iteration: 0,
            run_time: 0,
        }
    }
}

impl Defaults {
    /// Reject empty string sentinels, which would make natural keys ambiguous.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("movie_title", &self.movie_title),
            ("title", &self.title),
            ("country", &self.country),
            ("production_company", &self.production_company),
            ("role", &self.role),
            ("category", &self.category),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ModelError::EmptySentinel { field });
            }
        }
        Ok(())
    }
}

/// Options shared by every cleaner invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    pub defaults: Defaults,
    pub boolean_mode: BooleanMode,
    /// Carry unrecognized source columns after the canonical ones.
    pub keep_extra_columns: bool,
    /// Natural key overrides, keyed by `Entity::key`.
    pub keys: BTreeMap<String, Vec<String>>,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: CleanOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check sentinels and that every key override names a known entity.
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        for name in self.keys.keys() {
            if Entity::from_name(name).is_none() {
                return Err(ModelError::UnknownEntity(name.clone()));
            }
        }
        Ok(())
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_boolean_mode(mut self, mode: BooleanMode) -> Self {
        self.boolean_mode = mode;
        self
    }

    pub fn with_keep_extra_columns(mut self, enable: bool) -> Self {
        self.keep_extra_columns = enable;
        self
    }

    /// Replace the natural key of one entity.
    pub fn with_key(mut self, entity: Entity, columns: &[&str]) -> Self {
        self.keys.insert(
            entity.key().to_string(),
            columns.iter().map(|column| (*column).to_string()).collect(),
        );
        self
    }

    pub fn key_override(&self, entity: Entity) -> Option<&[String]> {
        self.keys
            .iter()
            .find(|(name, _)| Entity::from_name(name) == Some(entity))
            .map(|(_, columns)| columns.as_slice())
    }
}

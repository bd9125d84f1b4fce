//! The entity tables produced by the scraper.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One scraped table. Each entity is cleaned independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Person,
    Movie,
    MovieCountry,
    MovieProductionCompany,
    PersonWorkedOnMovie,
    FinalAcademyNomination,
}

impl Entity {
    pub const ALL: [Entity; 6] = [
        Entity::Person,
        Entity::Movie,
        Entity::MovieCountry,
        Entity::MovieProductionCompany,
        Entity::PersonWorkedOnMovie,
        Entity::FinalAcademyNomination,
    ];

    /// Table name as used by the scraper and the database.
    pub fn name(self) -> &'static str {
        match self {
            Entity::Person => "Person",
            Entity::Movie => "Movie",
            Entity::MovieCountry => "MovieCountry",
            Entity::MovieProductionCompany => "MovieProductionCompany",
            Entity::PersonWorkedOnMovie => "PersonWorkedOnMovie",
            Entity::FinalAcademyNomination => "FinalAcademyNomination",
        }
    }

    /// Snake-case key used in config files.
    pub fn key(self) -> &'static str {
        match self {
            Entity::Person => "person",
            Entity::Movie => "movie",
            Entity::MovieCountry => "movie_country",
            Entity::MovieProductionCompany => "movie_production_company",
            Entity::PersonWorkedOnMovie => "person_worked_on_movie",
            Entity::FinalAcademyNomination => "final_academy_nomination",
        }
    }

    /// Stem of the file the scraper writes for this entity.
    ///
    /// The movie table is the only one the scraper writes in lower case.
    pub fn file_stem(self) -> &'static str {
        match self {
            Entity::Movie => "movie",
            other => other.name(),
        }
    }

    pub fn input_file_name(self) -> String {
        format!("{}.csv", self.file_stem())
    }

    pub fn output_file_name(self) -> String {
        format!("{}_clean.csv", self.file_stem())
    }

    /// Match a file stem or user-supplied name against the known entities.
    ///
    /// Accepts the table name, the file stem, or the config key, ignoring case.
    pub fn from_name(value: &str) -> Option<Entity> {
        let trimmed = value.trim();
        Entity::ALL.into_iter().find(|entity| {
            trimmed.eq_ignore_ascii_case(entity.name())
                || trimmed.eq_ignore_ascii_case(entity.file_stem())
                || trimmed.eq_ignore_ascii_case(entity.key())
        })
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Entity::from_name(s).ok_or_else(|| ModelError::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_scraper_conventions() {
        assert_eq!(Entity::Movie.input_file_name(), "movie.csv");
        assert_eq!(Entity::Movie.output_file_name(), "movie_clean.csv");
        assert_eq!(Entity::Person.input_file_name(), "Person.csv");
        assert_eq!(
            Entity::FinalAcademyNomination.output_file_name(),
            "FinalAcademyNomination_clean.csv"
        );
    }

    #[test]
    fn from_name_accepts_every_spelling() {
        assert_eq!(Entity::from_name("movie"), Some(Entity::Movie));
        assert_eq!(Entity::from_name("MOVIE"), Some(Entity::Movie));
        assert_eq!(
            Entity::from_name("person_worked_on_movie"),
            Some(Entity::PersonWorkedOnMovie)
        );
        assert_eq!(
            Entity::from_name(" MovieCountry "),
            Some(Entity::MovieCountry)
        );
        assert_eq!(Entity::from_name("AcademyNomination"), None);
    }

    #[test]
    fn from_str_reports_unknown_names() {
        let err = "Studio".parse::<Entity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown entity 'Studio'");
    }
}

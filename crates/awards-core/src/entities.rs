//! Column tables for the six entity cleaners.

use awards_model::{CleanValue, Defaults, Entity};

use crate::policy::{ColumnKind, ColumnSpec, Missing};

const PERSON_IDENTITY: [&str; 5] = [
    "personFirstName",
    "personLastName",
    "personBirthDate",
    "movieTitle",
    "movieReleaseDate",
];

/// Default natural key of an entity.
pub fn natural_key(entity: Entity) -> &'static [&'static str] {
    match entity {
        Entity::Person => &["person_first", "person_last", "person_birth_date"],
        Entity::Movie => &["title", "releaseDate"],
        Entity::MovieCountry => &["title", "releaseDate", "country"],
        Entity::MovieProductionCompany => &["title", "releaseDate", "productionCompany"],
        Entity::PersonWorkedOnMovie => &PERSON_IDENTITY,
        Entity::FinalAcademyNomination => &[
            "personFirstName",
            "personLastName",
            "personBirthDate",
            "movieTitle",
            "movieReleaseDate",
            "category",
        ],
    }
}

/// Ordered output columns of one entity with their cleaning policy.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySchema {
    pub entity: Entity,
    pub columns: Vec<ColumnSpec>,
}

impl EntitySchema {
    pub fn for_entity(entity: Entity, defaults: &Defaults) -> Self {
        let columns = match entity {
            Entity::Person => person(defaults),
            Entity::Movie => movie(defaults),
            Entity::MovieCountry => movie_country(defaults),
            Entity::MovieProductionCompany => movie_production_company(defaults),
            Entity::PersonWorkedOnMovie => person_worked_on_movie(defaults),
            Entity::FinalAcademyNomination => final_academy_nomination(defaults),
        };
        Self { entity, columns }
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|spec| spec.name).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|spec| spec.name == name)
    }

    /// Columns whose absence makes the whole table unusable.
    pub fn required(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|spec| spec.is_required())
    }
}

fn person(defaults: &Defaults) -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::required("person_first").with_aliases(&["personFirstName", "PersonFirstName"]),
        ColumnSpec::required("person_last").with_aliases(&["personLastName", "PersonLastName"]),
        ColumnSpec::new(
            "person_birth_date",
            ColumnKind::BirthDate(defaults.date),
            Missing::Default(CleanValue::Date(defaults.date)),
        )
        .with_aliases(&["personBirthDate", "PersonBirthDate"]),
        ColumnSpec::new(
            "person_country_of_birth",
            ColumnKind::Country,
            Missing::Default(CleanValue::text("")),
        )
        .with_aliases(&["personCountryOfBirth"]),
        ColumnSpec::new("death_date", ColumnKind::Date, Missing::Absent)
            .with_aliases(&["deathDate", "DeathDate"]),
    ]
}

fn movie(defaults: &Defaults) -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::required("title"),
        ColumnSpec::date("releaseDate", defaults.date)
            .with_aliases(&["releasedate", "release_date"]),
        ColumnSpec::new("budget", ColumnKind::Money, Missing::Absent),
        ColumnSpec::new("boxOffice", ColumnKind::Money, Missing::Absent),
        ColumnSpec::new(
            "runTime",
            ColumnKind::Integer,
            Missing::Default(CleanValue::Integer(defaults.run_time)),
        )
        .with_aliases(&["runtime", "run_time"]),
        ColumnSpec::text("movieLanguage", ""),
    ]
}

fn movie_country(defaults: &Defaults) -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::text("title", &defaults.title),
        ColumnSpec::date("releaseDate", defaults.date),
        ColumnSpec::text("country", &defaults.country),
    ]
}

fn movie_production_company(defaults: &Defaults) -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::text("title", &defaults.title),
        ColumnSpec::date("releaseDate", defaults.date),
        ColumnSpec::text("productionCompany", &defaults.production_company).with_max_len(99),
    ]
}

/// Person and movie identity shared by credits and nominations.
fn identity(defaults: &Defaults) -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::text("personFirstName", &defaults.first_name).with_aliases(&["PersonFirstName"]),
        ColumnSpec::text("personLastName", &defaults.last_name).with_aliases(&["PersonLastName"]),
        ColumnSpec::date("personBirthDate", defaults.date).with_aliases(&["PersonBirthDate"]),
        ColumnSpec::text("movieTitle", &defaults.movie_title).with_aliases(&["MovieTitle"]),
        ColumnSpec::date("movieReleaseDate", defaults.date).with_aliases(&["MovieReleaseDate"]),
    ]
}

fn person_worked_on_movie(defaults: &Defaults) -> Vec<ColumnSpec> {
    let mut columns = identity(defaults);
    columns.push(ColumnSpec::text("roleInMovie", &defaults.role).with_aliases(&["RoleInMovie"]));
    columns
}

fn final_academy_nomination(defaults: &Defaults) -> Vec<ColumnSpec> {
    let mut columns = identity(defaults);
    columns.push(ColumnSpec::text("category", &defaults.category).with_max_len(50));
    columns.push(ColumnSpec::new(
        "iteration",
        ColumnKind::Integer,
        Missing::Default(CleanValue::Integer(defaults.iteration)),
    ));
    columns.push(ColumnSpec::new(
        "grantedOrNot",
        ColumnKind::Boolean,
        Missing::Default(CleanValue::Bool(false)),
    ));
    columns
}

//! Author model and form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{Book, DISPLAY_DATE, INPUT_DATE};
use crate::forms::{validation::parse_optional_date, CatalogForm, FormErrors, SubmittedForm};

/// Full author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// "Family, First", or empty when either part is missing
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    pub fn date_of_birth_formatted(&self) -> String {
        self.date_of_birth
            .map(|d| d.format(DISPLAY_DATE).to_string())
            .unwrap_or_default()
    }

    pub fn date_of_death_formatted(&self) -> String {
        self.date_of_death
            .map(|d| d.format(DISPLAY_DATE).to_string())
            .unwrap_or_default()
    }

    /// "birth - death", each side empty when unknown
    pub fn lifespan(&self) -> String {
        format!(
            "{} - {}",
            self.date_of_birth_formatted(),
            self.date_of_death_formatted()
        )
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// Author detail page data
#[derive(Debug, Clone)]
pub struct AuthorDetail {
    pub author: Author,
    pub books: Vec<Book>,
}

/// Author create/update form, also the draft re-rendered on errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct AuthorForm {
    /// Set when updating an existing author
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "First name must be specified."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Family name must be specified."))]
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}

impl CatalogForm for AuthorForm {
    const FIELDS: &'static [&'static str] =
        &["first_name", "family_name", "date_of_birth", "date_of_death"];

    fn from_submitted(form: &SubmittedForm) -> Self {
        Self {
            id: None,
            first_name: form.text("first_name"),
            family_name: form.text("family_name"),
            date_of_birth: form.text("date_of_birth"),
            date_of_death: form.text("date_of_death"),
        }
    }

    fn check_values(&self, errors: &mut FormErrors) {
        if parse_optional_date(&self.date_of_birth).is_err() {
            errors.push("date_of_birth", "Invalid date of birth.");
        }
        if parse_optional_date(&self.date_of_death).is_err() {
            errors.push("date_of_death", "Invalid date of death.");
        }
    }
}

impl AuthorForm {
    /// Build the entity; `None` when a date does not parse.
    pub fn to_author(&self, id: Uuid) -> Option<Author> {
        Some(Author {
            id,
            first_name: self.first_name.clone(),
            family_name: self.family_name.clone(),
            date_of_birth: parse_optional_date(&self.date_of_birth).ok()?,
            date_of_death: parse_optional_date(&self.date_of_death).ok()?,
        })
    }
}

impl From<&Author> for AuthorForm {
    fn from(author: &Author) -> Self {
        Self {
            id: Some(author.id),
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author
                .date_of_birth
                .map(|d| d.format(INPUT_DATE).to_string())
                .unwrap_or_default(),
            date_of_death: author
                .date_of_death
                .map(|d| d.format(INPUT_DATE).to_string())
                .unwrap_or_default(),
        }
    }
}

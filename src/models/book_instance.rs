//! Book instance (physical copy) model and form

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use super::{Book, DISPLAY_DATE, INPUT_DATE};
use crate::forms::{validation::parse_optional_date, CatalogForm, FormErrors, SubmittedForm};

/// Circulation status of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

#[derive(Debug, Error)]
#[error("Unknown book instance status: {0}")]
pub struct UnknownStatus(pub String);

impl BookInstanceStatus {
    pub const ALL: [BookInstanceStatus; 4] = [
        BookInstanceStatus::Available,
        BookInstanceStatus::Maintenance,
        BookInstanceStatus::Loaned,
        BookInstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookInstanceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for BookInstanceStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Book instance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub status: BookInstanceStatus,
}

impl BookInstance {
    pub fn due_back_formatted(&self) -> String {
        self.due_back
            .map(|d| d.format(DISPLAY_DATE).to_string())
            .unwrap_or_default()
    }

    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }
}

/// Copy with its book resolved, as shown in lists and on the detail page
#[derive(Debug, Clone)]
pub struct BookInstanceEntry {
    pub instance: BookInstance,
    /// `None` when the referenced book no longer exists
    pub book: Option<Book>,
}

/// Book instance create/update form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BookInstanceForm {
    /// Set when updating an existing copy
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "Book must be specified."))]
    pub book: String,
    #[validate(length(min = 1, message = "Imprint must be specified."))]
    pub imprint: String,
    pub due_back: String,
    pub status: String,
}

impl Default for BookInstanceForm {
    /// Blank form with the default status preselected
    fn default() -> Self {
        Self {
            id: None,
            book: String::new(),
            imprint: String::new(),
            due_back: String::new(),
            status: BookInstanceStatus::default().as_str().to_string(),
        }
    }
}

impl CatalogForm for BookInstanceForm {
    const FIELDS: &'static [&'static str] = &["book", "imprint", "due_back", "status"];

    fn from_submitted(form: &SubmittedForm) -> Self {
        Self {
            id: None,
            book: form.text("book"),
            imprint: form.text("imprint"),
            due_back: form.text("due_back"),
            status: match form.text("status") {
                status if status.is_empty() => BookInstanceStatus::default().as_str().to_string(),
                status => status,
            },
        }
    }

    fn check_values(&self, errors: &mut FormErrors) {
        if !self.book.is_empty() && Uuid::parse_str(&self.book).is_err() {
            errors.push("book", "Book must be a valid selection.");
        }
        if parse_optional_date(&self.due_back).is_err() {
            errors.push("due_back", "Invalid date.");
        }
        if self.status.parse::<BookInstanceStatus>().is_err() {
            errors.push("status", "Invalid status.");
        }
    }
}

impl BookInstanceForm {
    pub fn to_instance(&self, id: Uuid) -> Option<BookInstance> {
        Some(BookInstance {
            id,
            book_id: Uuid::parse_str(&self.book).ok()?,
            imprint: self.imprint.clone(),
            due_back: parse_optional_date(&self.due_back).ok()?,
            status: self.status.parse().ok()?,
        })
    }
}

impl From<&BookInstance> for BookInstanceForm {
    fn from(instance: &BookInstance) -> Self {
        Self {
            id: Some(instance.id),
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            due_back: instance
                .due_back
                .map(|d| d.format(INPUT_DATE).to_string())
                .unwrap_or_default(),
            status: instance.status.as_str().to_string(),
        }
    }
}

//! Genre model and form

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::Book;
use crate::forms::{CatalogForm, SubmittedForm};

/// Genre record; names are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Genre detail page data
#[derive(Debug, Clone)]
pub struct GenreDetail {
    pub genre: Genre,
    pub books: Vec<Book>,
}

/// Genre create/update form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct GenreForm {
    /// Set when updating an existing genre
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "Genre name required"))]
    pub name: String,
}

impl CatalogForm for GenreForm {
    const FIELDS: &'static [&'static str] = &["name"];

    fn from_submitted(form: &SubmittedForm) -> Self {
        Self {
            id: None,
            name: form.text("name"),
        }
    }
}

impl GenreForm {
    pub fn to_genre(&self, id: Uuid) -> Genre {
        Genre {
            id,
            name: self.name.clone(),
        }
    }
}

impl From<&Genre> for GenreForm {
    fn from(genre: &Genre) -> Self {
        Self {
            id: Some(genre.id),
            name: genre.name.clone(),
        }
    }
}

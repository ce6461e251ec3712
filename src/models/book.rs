//! Book model and form

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{Author, BookInstance, Genre};
use crate::forms::{CatalogForm, FormErrors, SubmittedForm};

/// Book record; author and genres are stored as references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<Uuid>,
}

impl Book {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Book with its author resolved, as shown in the book list
#[derive(Debug, Clone)]
pub struct BookListEntry {
    pub book: Book,
    pub author: Option<Author>,
}

/// Book detail page data
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    /// `None` when the referenced author no longer exists
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
    pub instances: Vec<BookInstance>,
}

/// Book create/update form, also the draft re-rendered on errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BookForm {
    /// Set when updating an existing book
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty."))]
    pub author: String,
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[validate(length(min = 1, message = "ISBN must not be empty."))]
    pub isbn: String,
    /// Selected genre ids, always a list
    pub genre: Vec<String>,
}

impl CatalogForm for BookForm {
    const FIELDS: &'static [&'static str] = &["title", "author", "summary", "isbn", "genre"];

    fn from_submitted(form: &SubmittedForm) -> Self {
        Self {
            id: None,
            title: form.text("title"),
            author: form.text("author"),
            summary: form.text("summary"),
            isbn: form.text("isbn"),
            genre: form.list("genre"),
        }
    }

    fn check_values(&self, errors: &mut FormErrors) {
        if !self.author.is_empty() && Uuid::parse_str(&self.author).is_err() {
            errors.push("author", "Author must be a valid selection.");
        }
        if self.genre.iter().any(|g| Uuid::parse_str(g).is_err()) {
            errors.push("genre", "Genre selection is invalid.");
        }
    }
}

impl BookForm {
    /// Whether the genre with this id was selected
    pub fn has_genre(&self, id: Uuid) -> bool {
        let id = id.to_string();
        self.genre.iter().any(|g| *g == id)
    }

    /// Build the entity; `None` when an id does not parse.
    pub fn to_book(&self, id: Uuid) -> Option<Book> {
        let genre_ids = self
            .genre
            .iter()
            .map(|g| Uuid::parse_str(g).ok())
            .collect::<Option<Vec<_>>>()?;

        Some(Book {
            id,
            title: self.title.clone(),
            author_id: Uuid::parse_str(&self.author).ok()?,
            summary: self.summary.clone(),
            isbn: self.isbn.clone(),
            genre_ids,
        })
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            id: Some(book.id),
            title: book.title.clone(),
            author: book.author_id.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genre_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}

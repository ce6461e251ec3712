//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use author::{Author, AuthorDetail, AuthorForm};
pub use book::{Book, BookDetail, BookForm, BookListEntry};
pub use book_instance::{BookInstance, BookInstanceEntry, BookInstanceForm, BookInstanceStatus};
pub use genre::{Genre, GenreDetail, GenreForm};

/// Display format for dates on catalog pages, e.g. "Jan 5, 2024"
pub(crate) const DISPLAY_DATE: &str = "%b %-d, %Y";

/// Format used by `<input type="date">`
pub(crate) const INPUT_DATE: &str = "%Y-%m-%d";

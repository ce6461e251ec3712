//! Repository layer for catalog storage
//!
//! Handlers and services only see [`CatalogStore`]. Two backends implement
//! it: [`postgres::PgStore`] for deployments and [`memory::MemoryStore`] for
//! development and tests.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod memory;
pub mod postgres;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, Book, BookInstance, BookInstanceStatus, Genre},
};

/// Persistence operations consumed by the catalog services.
///
/// Lookups by id return `Ok(None)` when nothing matches; `replace` returns
/// `Ok(None)` when the id no longer exists. Lists come back in display order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Cheap round trip used by the readiness probe
    async fn ping(&self) -> AppResult<()>;

    /// All authors, by family name
    async fn authors_list(&self) -> AppResult<Vec<Author>>;
    async fn authors_get(&self, id: Uuid) -> AppResult<Option<Author>>;
    async fn authors_count(&self) -> AppResult<i64>;
    async fn authors_insert(&self, author: &Author) -> AppResult<()>;
    async fn authors_replace(&self, author: &Author) -> AppResult<Option<Author>>;
    async fn authors_delete(&self, id: Uuid) -> AppResult<bool>;

    /// All genres, by name ascending
    async fn genres_list(&self) -> AppResult<Vec<Genre>>;
    async fn genres_get(&self, id: Uuid) -> AppResult<Option<Genre>>;
    /// Exact, case-sensitive match
    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;
    async fn genres_count(&self) -> AppResult<i64>;
    /// Insert unless the name is already taken. Returns the stored genre and
    /// whether it was created by this call.
    async fn genres_insert(&self, genre: &Genre) -> AppResult<(Genre, bool)>;
    async fn genres_replace(&self, genre: &Genre) -> AppResult<Option<Genre>>;
    async fn genres_delete(&self, id: Uuid) -> AppResult<bool>;

    /// All books, by title
    async fn books_list(&self) -> AppResult<Vec<Book>>;
    async fn books_get(&self, id: Uuid) -> AppResult<Option<Book>>;
    async fn books_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>>;
    async fn books_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>>;
    async fn books_count(&self) -> AppResult<i64>;
    async fn books_insert(&self, book: &Book) -> AppResult<()>;
    async fn books_replace(&self, book: &Book) -> AppResult<Option<Book>>;
    async fn books_delete(&self, id: Uuid) -> AppResult<bool>;

    /// All copies, by imprint
    async fn book_instances_list(&self) -> AppResult<Vec<BookInstance>>;
    async fn book_instances_get(&self, id: Uuid) -> AppResult<Option<BookInstance>>;
    async fn book_instances_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>>;
    /// Count every copy, or only those in `status`
    async fn book_instances_count(&self, status: Option<BookInstanceStatus>) -> AppResult<i64>;
    async fn book_instances_insert(&self, instance: &BookInstance) -> AppResult<()>;
    async fn book_instances_replace(&self, instance: &BookInstance) -> AppResult<Option<BookInstance>>;
    async fn book_instances_delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Shared handle on the configured store
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn CatalogStore>,
}

impl Repository {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Repository backed by PostgreSQL
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self::new(postgres::PgStore::new(pool))
    }

    /// Empty repository held in process memory
    pub fn in_memory() -> Self {
        Self::new(memory::MemoryStore::new())
    }
}

impl Deref for Repository {
    type Target = dyn CatalogStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}

//! PostgreSQL backend

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::{
    authors::AuthorsRepository, book_instances::BookInstancesRepository, books::BooksRepository,
    genres::GenresRepository, CatalogStore,
};
use crate::{
    error::AppResult,
    models::{Author, Book, BookInstance, BookInstanceStatus, Genre},
};

/// Catalog store holding one repository per table
#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
    authors: AuthorsRepository,
    genres: GenresRepository,
    books: BooksRepository,
    book_instances: BookInstancesRepository,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: AuthorsRepository::new(pool.clone()),
            genres: GenresRepository::new(pool.clone()),
            books: BooksRepository::new(pool.clone()),
            book_instances: BookInstancesRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        self.authors.list().await
    }

    async fn authors_get(&self, id: Uuid) -> AppResult<Option<Author>> {
        self.authors.get_by_id(id).await
    }

    async fn authors_count(&self) -> AppResult<i64> {
        self.authors.count().await
    }

    async fn authors_insert(&self, author: &Author) -> AppResult<()> {
        self.authors.create(author).await
    }

    async fn authors_replace(&self, author: &Author) -> AppResult<Option<Author>> {
        self.authors.replace(author).await
    }

    async fn authors_delete(&self, id: Uuid) -> AppResult<bool> {
        self.authors.delete(id).await
    }

    async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        self.genres.list().await
    }

    async fn genres_get(&self, id: Uuid) -> AppResult<Option<Genre>> {
        self.genres.get_by_id(id).await
    }

    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        self.genres.find_by_name(name).await
    }

    async fn genres_count(&self) -> AppResult<i64> {
        self.genres.count().await
    }

    async fn genres_insert(&self, genre: &Genre) -> AppResult<(Genre, bool)> {
        self.genres.create(genre).await
    }

    async fn genres_replace(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        self.genres.replace(genre).await
    }

    async fn genres_delete(&self, id: Uuid) -> AppResult<bool> {
        self.genres.delete(id).await
    }

    async fn books_list(&self) -> AppResult<Vec<Book>> {
        self.books.list().await
    }

    async fn books_get(&self, id: Uuid) -> AppResult<Option<Book>> {
        self.books.get_by_id(id).await
    }

    async fn books_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        self.books.list_by_author(author_id).await
    }

    async fn books_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        self.books.list_by_genre(genre_id).await
    }

    async fn books_count(&self) -> AppResult<i64> {
        self.books.count().await
    }

    async fn books_insert(&self, book: &Book) -> AppResult<()> {
        self.books.create(book).await
    }

    async fn books_replace(&self, book: &Book) -> AppResult<Option<Book>> {
        self.books.replace(book).await
    }

    async fn books_delete(&self, id: Uuid) -> AppResult<bool> {
        self.books.delete(id).await
    }

    async fn book_instances_list(&self) -> AppResult<Vec<BookInstance>> {
        self.book_instances.list().await
    }

    async fn book_instances_get(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        self.book_instances.get_by_id(id).await
    }

    async fn book_instances_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>> {
        self.book_instances.list_by_book(book_id).await
    }

    async fn book_instances_count(&self, status: Option<BookInstanceStatus>) -> AppResult<i64> {
        self.book_instances.count(status).await
    }

    async fn book_instances_insert(&self, instance: &BookInstance) -> AppResult<()> {
        self.book_instances.create(instance).await
    }

    async fn book_instances_replace(&self, instance: &BookInstance) -> AppResult<Option<BookInstance>> {
        self.book_instances.replace(instance).await
    }

    async fn book_instances_delete(&self, id: Uuid) -> AppResult<bool> {
        self.book_instances.delete(id).await
    }
}

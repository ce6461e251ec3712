//! In-process backend
//!
//! Collections are insertion-ordered maps behind async read/write locks.
//! Lists are sorted on the way out to match the PostgreSQL ordering.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CatalogStore;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInstance, BookInstanceStatus, Genre},
};

#[derive(Default)]
pub struct MemoryStore {
    authors: RwLock<IndexMap<Uuid, Author>>,
    genres: RwLock<IndexMap<Uuid, Genre>>,
    books: RwLock<IndexMap<Uuid, Book>>,
    book_instances: RwLock<IndexMap<Uuid, BookInstance>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Overwrite an existing entry, leaving the map untouched when `id` is unknown
fn replace_existing<T: Clone>(map: &mut IndexMap<Uuid, T>, id: Uuid, value: &T) -> Option<T> {
    let slot = map.get_mut(&id)?;
    *slot = value.clone();
    Some(value.clone())
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        let mut authors: Vec<Author> = self.authors.read().await.values().cloned().collect();
        authors.sort_by(|a, b| {
            (&a.family_name, &a.first_name).cmp(&(&b.family_name, &b.first_name))
        });
        Ok(authors)
    }

    async fn authors_get(&self, id: Uuid) -> AppResult<Option<Author>> {
        Ok(self.authors.read().await.get(&id).cloned())
    }

    async fn authors_count(&self) -> AppResult<i64> {
        Ok(self.authors.read().await.len() as i64)
    }

    async fn authors_insert(&self, author: &Author) -> AppResult<()> {
        self.authors.write().await.insert(author.id, author.clone());
        Ok(())
    }

    async fn authors_replace(&self, author: &Author) -> AppResult<Option<Author>> {
        Ok(replace_existing(&mut *self.authors.write().await, author.id, author))
    }

    async fn authors_delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.authors.write().await.shift_remove(&id).is_some())
    }

    async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        let mut genres: Vec<Genre> = self.genres.read().await.values().cloned().collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn genres_get(&self, id: Uuid) -> AppResult<Option<Genre>> {
        Ok(self.genres.read().await.get(&id).cloned())
    }

    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        Ok(self
            .genres
            .read()
            .await
            .values()
            .find(|g| g.name == name)
            .cloned())
    }

    async fn genres_count(&self) -> AppResult<i64> {
        Ok(self.genres.read().await.len() as i64)
    }

    async fn genres_insert(&self, genre: &Genre) -> AppResult<(Genre, bool)> {
        // Check and insert under one write lock so equal names never race.
        let mut genres = self.genres.write().await;
        if let Some(existing) = genres.values().find(|g| g.name == genre.name) {
            return Ok((existing.clone(), false));
        }
        genres.insert(genre.id, genre.clone());
        Ok((genre.clone(), true))
    }

    async fn genres_replace(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        let mut genres = self.genres.write().await;
        if genres.values().any(|g| g.name == genre.name && g.id != genre.id) {
            return Err(AppError::Conflict(format!("Genre {:?} already exists", genre.name)));
        }
        Ok(replace_existing(&mut genres, genre.id, genre))
    }

    async fn genres_delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.genres.write().await.shift_remove(&id).is_some())
    }

    async fn books_list(&self) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self.books.read().await.values().cloned().collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn books_get(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn books_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self
            .books
            .read()
            .await
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn books_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self
            .books
            .read()
            .await
            .values()
            .filter(|b| b.genre_ids.contains(&genre_id))
            .cloned()
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn books_count(&self) -> AppResult<i64> {
        Ok(self.books.read().await.len() as i64)
    }

    async fn books_insert(&self, book: &Book) -> AppResult<()> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(())
    }

    async fn books_replace(&self, book: &Book) -> AppResult<Option<Book>> {
        Ok(replace_existing(&mut *self.books.write().await, book.id, book))
    }

    async fn books_delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.books.write().await.shift_remove(&id).is_some())
    }

    async fn book_instances_list(&self) -> AppResult<Vec<BookInstance>> {
        let mut instances: Vec<BookInstance> =
            self.book_instances.read().await.values().cloned().collect();
        instances.sort_by(|a, b| a.imprint.cmp(&b.imprint));
        Ok(instances)
    }

    async fn book_instances_get(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        Ok(self.book_instances.read().await.get(&id).cloned())
    }

    async fn book_instances_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>> {
        let mut instances: Vec<BookInstance> = self
            .book_instances
            .read()
            .await
            .values()
            .filter(|i| i.book_id == book_id)
            .cloned()
            .collect();
        instances.sort_by(|a, b| a.imprint.cmp(&b.imprint));
        Ok(instances)
    }

    async fn book_instances_count(&self, status: Option<BookInstanceStatus>) -> AppResult<i64> {
        let instances = self.book_instances.read().await;
        let count = match status {
            Some(status) => instances.values().filter(|i| i.status == status).count(),
            None => instances.len(),
        };
        Ok(count as i64)
    }

    async fn book_instances_insert(&self, instance: &BookInstance) -> AppResult<()> {
        self.book_instances
            .write()
            .await
            .insert(instance.id, instance.clone());
        Ok(())
    }

    async fn book_instances_replace(&self, instance: &BookInstance) -> AppResult<Option<BookInstance>> {
        Ok(replace_existing(
            &mut *self.book_instances.write().await,
            instance.id,
            instance,
        ))
    }

    async fn book_instances_delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.book_instances.write().await.shift_remove(&id).is_some())
    }
}

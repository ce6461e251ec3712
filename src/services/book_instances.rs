//! Book instances service

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInstance, BookInstanceEntry},
    repository::Repository,
};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Book copy {} not found", id))
}

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All copies with their books
    pub async fn list(&self) -> AppResult<Vec<BookInstanceEntry>> {
        let (instances, books) = tokio::try_join!(
            self.repository.book_instances_list(),
            self.repository.books_list(),
        )?;

        let books: HashMap<Uuid, Book> = books.into_iter().map(|b| (b.id, b)).collect();
        Ok(instances
            .into_iter()
            .map(|instance| BookInstanceEntry {
                book: books.get(&instance.book_id).cloned(),
                instance,
            })
            .collect())
    }

    /// Copy with its book
    pub async fn detail(&self, id: Uuid) -> AppResult<BookInstanceEntry> {
        let instance = self.get(id).await?;
        let book = self.repository.books_get(instance.book_id).await?;
        Ok(BookInstanceEntry { instance, book })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<BookInstance> {
        self.repository
            .book_instances_get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Books offered by the copy form
    pub async fn form_options(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    /// Copy to edit plus the form's reference data
    pub async fn edit(&self, id: Uuid) -> AppResult<(BookInstance, Vec<Book>)> {
        let (instance, books) = tokio::try_join!(
            self.repository.book_instances_get(id),
            self.repository.books_list(),
        )?;
        let instance = instance.ok_or_else(|| not_found(id))?;
        Ok((instance, books))
    }

    pub async fn create(&self, instance: &BookInstance) -> AppResult<()> {
        self.repository.book_instances_insert(instance).await?;
        tracing::info!(
            "Book copy created: id={} book={}",
            instance.id,
            instance.book_id
        );
        Ok(())
    }

    pub async fn update(&self, instance: &BookInstance) -> AppResult<BookInstance> {
        let updated = self
            .repository
            .book_instances_replace(instance)
            .await?
            .ok_or_else(|| not_found(instance.id))?;
        tracing::info!("Book copy updated: id={}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.book_instances_delete(id).await? {
            tracing::info!("Book copy deleted: id={}", id);
        }
        Ok(())
    }
}

//! Authors service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetail, Book},
    repository::Repository,
};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Author {} not found", id))
}

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors_list().await
    }

    /// Author with their books
    pub async fn detail(&self, id: Uuid) -> AppResult<AuthorDetail> {
        let (author, books) = tokio::try_join!(
            self.repository.authors_get(id),
            self.repository.books_by_author(id),
        )?;
        let author = author.ok_or_else(|| not_found(id))?;
        Ok(AuthorDetail { author, books })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Author> {
        self.repository
            .authors_get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, author: &Author) -> AppResult<()> {
        self.repository.authors_insert(author).await?;
        tracing::info!("Author created: id={}", author.id);
        Ok(())
    }

    pub async fn update(&self, author: &Author) -> AppResult<Author> {
        let updated = self
            .repository
            .authors_replace(author)
            .await?
            .ok_or_else(|| not_found(author.id))?;
        tracing::info!("Author updated: id={}", updated.id);
        Ok(updated)
    }

    /// Author and the books that block deletion; `None` when already gone
    pub async fn delete_check(&self, id: Uuid) -> AppResult<Option<(Author, Vec<Book>)>> {
        let (author, books) = tokio::try_join!(
            self.repository.authors_get(id),
            self.repository.books_by_author(id),
        )?;
        Ok(author.map(|author| (author, books)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.authors_delete(id).await? {
            tracing::info!("Author deleted: id={}", id);
        }
        Ok(())
    }
}

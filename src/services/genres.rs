//! Genres service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Genre, GenreDetail},
    repository::Repository,
};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Genre {} not found", id))
}

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All genres, by name ascending
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres_list().await
    }

    /// Genre with its books
    pub async fn detail(&self, id: Uuid) -> AppResult<GenreDetail> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres_get(id),
            self.repository.books_by_genre(id),
        )?;
        let genre = genre.ok_or_else(|| not_found(id))?;
        Ok(GenreDetail { genre, books })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Genre> {
        self.repository
            .genres_get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a genre unless one with the same name exists.
    ///
    /// Returns the genre to redirect to and whether it was created.
    pub async fn create(&self, genre: &Genre) -> AppResult<(Genre, bool)> {
        if let Some(existing) = self.repository.genres_find_by_name(&genre.name).await? {
            tracing::debug!("Genre {:?} already exists as id={}", genre.name, existing.id);
            return Ok((existing, false));
        }

        // The store re-checks the name, so a concurrent create of the same
        // name also ends on the existing genre.
        let (stored, created) = self.repository.genres_insert(genre).await?;
        if created {
            tracing::info!("Genre created: id={} name={:?}", stored.id, stored.name);
        }
        Ok((stored, created))
    }

    /// Another genre already using `genre.name`, if any
    pub async fn name_conflict(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        Ok(self
            .repository
            .genres_find_by_name(&genre.name)
            .await?
            .filter(|existing| existing.id != genre.id))
    }

    pub async fn update(&self, genre: &Genre) -> AppResult<Genre> {
        let updated = self
            .repository
            .genres_replace(genre)
            .await?
            .ok_or_else(|| not_found(genre.id))?;
        tracing::info!("Genre updated: id={}", updated.id);
        Ok(updated)
    }

    /// Genre and the books that block deletion; `None` when already gone
    pub async fn delete_check(&self, id: Uuid) -> AppResult<Option<(Genre, Vec<Book>)>> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres_get(id),
            self.repository.books_by_genre(id),
        )?;
        Ok(genre.map(|genre| (genre, books)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.genres_delete(id).await? {
            tracing::info!("Genre deleted: id={}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(name: &str) -> Genre {
        Genre {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn create_with_existing_name_returns_existing_genre() {
        let service = GenresService::new(Repository::in_memory());
        let (first, created) = service.create(&genre("Science Fiction")).await.unwrap();
        assert!(created);

        let (again, created) = service.create(&genre("Science Fiction")).await.unwrap();
        assert!(!created);
        assert_eq!(again.id, first.id);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn name_conflict_ignores_the_genre_itself() {
        let service = GenresService::new(Repository::in_memory());
        let (poetry, _) = service.create(&genre("Poetry")).await.unwrap();
        let (drama, _) = service.create(&genre("Drama")).await.unwrap();

        assert!(service.name_conflict(&poetry).await.unwrap().is_none());

        let renamed = Genre {
            name: "Poetry".to_string(),
            ..drama
        };
        assert_eq!(service.name_conflict(&renamed).await.unwrap(), Some(poetry));
    }

    #[tokio::test]
    async fn detail_of_unknown_genre_is_not_found() {
        let service = GenresService::new(Repository::in_memory());
        let err = service.detail(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

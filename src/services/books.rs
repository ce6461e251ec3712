//! Books service

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookDetail, BookInstance, BookListEntry, Genre},
    repository::Repository,
};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books with their authors
    pub async fn list(&self) -> AppResult<Vec<BookListEntry>> {
        let (books, authors) = tokio::try_join!(
            self.repository.books_list(),
            self.repository.authors_list(),
        )?;

        let authors: HashMap<Uuid, Author> = authors.into_iter().map(|a| (a.id, a)).collect();
        Ok(books
            .into_iter()
            .map(|book| BookListEntry {
                author: authors.get(&book.author_id).cloned(),
                book,
            })
            .collect())
    }

    /// Book with author, genres and copies
    pub async fn detail(&self, id: Uuid) -> AppResult<BookDetail> {
        let (book, instances) = tokio::try_join!(
            self.repository.books_get(id),
            self.repository.book_instances_by_book(id),
        )?;
        let book = book.ok_or_else(|| not_found(id))?;

        let (author, genres) = tokio::try_join!(
            self.repository.authors_get(book.author_id),
            self.repository.genres_list(),
        )?;
        let genres = genres
            .into_iter()
            .filter(|g| book.genre_ids.contains(&g.id))
            .collect();

        Ok(BookDetail {
            book,
            author,
            genres,
            instances,
        })
    }

    /// Reference data for the book form
    pub async fn form_options(&self) -> AppResult<(Vec<Author>, Vec<Genre>)> {
        tokio::try_join!(
            self.repository.authors_list(),
            self.repository.genres_list(),
        )
    }

    /// Book to edit plus the form's reference data
    pub async fn edit(&self, id: Uuid) -> AppResult<(Book, Vec<Author>, Vec<Genre>)> {
        let (book, authors, genres) = tokio::try_join!(
            self.repository.books_get(id),
            self.repository.authors_list(),
            self.repository.genres_list(),
        )?;
        let book = book.ok_or_else(|| not_found(id))?;
        Ok((book, authors, genres))
    }

    pub async fn create(&self, book: &Book) -> AppResult<()> {
        self.repository.books_insert(book).await?;
        tracing::info!("Book created: id={} title={:?}", book.id, book.title);
        Ok(())
    }

    /// Replace every attribute of an existing book
    pub async fn update(&self, book: &Book) -> AppResult<Book> {
        let updated = self
            .repository
            .books_replace(book)
            .await?
            .ok_or_else(|| not_found(book.id))?;
        tracing::info!("Book updated: id={}", updated.id);
        Ok(updated)
    }

    /// Book and the copies that block its deletion; `None` when already gone
    pub async fn delete_check(&self, id: Uuid) -> AppResult<Option<(Book, Vec<BookInstance>)>> {
        let (book, instances) = tokio::try_join!(
            self.repository.books_get(id),
            self.repository.book_instances_by_book(id),
        )?;
        Ok(book.map(|book| (book, instances)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.books_delete(id).await? {
            tracing::info!("Book deleted: id={}", id);
        }
        Ok(())
    }
}

//! Shared helpers for the HTTP-level tests
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;
use uuid::Uuid;

use library_catalog::{
    config::AppConfig,
    models::{Author, Book, BookInstance, BookInstanceStatus, Genre},
    repository::Repository,
    AppState,
};

/// Router over an empty in-memory catalog, plus a handle on its store
pub fn build_test_app() -> (Router, Repository) {
    let repository = Repository::in_memory();
    let state = AppState::new(AppConfig::default(), repository.clone());
    (library_catalog::api::create_router(state), repository)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST an already url-encoded body
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn seed_author(repository: &Repository, first: &str, family: &str) -> Author {
    let author = Author {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        family_name: family.to_string(),
        date_of_birth: None,
        date_of_death: None,
    };
    repository.authors_insert(&author).await.unwrap();
    author
}

pub async fn seed_genre(repository: &Repository, name: &str) -> Genre {
    let genre = Genre {
        id: Uuid::new_v4(),
        name: name.to_string(),
    };
    repository.genres_insert(&genre).await.unwrap().0
}

pub async fn seed_book(repository: &Repository, title: &str, author: &Author, genres: &[&Genre]) -> Book {
    let book = Book {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author_id: author.id,
        summary: format!("Summary of {}", title),
        isbn: "9780000000000".to_string(),
        genre_ids: genres.iter().map(|g| g.id).collect(),
    };
    repository.books_insert(&book).await.unwrap();
    book
}

pub async fn seed_instance(repository: &Repository, book: &Book, status: BookInstanceStatus) -> BookInstance {
    let instance = BookInstance {
        id: Uuid::new_v4(),
        book_id: book.id,
        imprint: format!("Imprint of {}", book.title),
        due_back: None,
        status,
    };
    repository.book_instances_insert(&instance).await.unwrap();
    instance
}

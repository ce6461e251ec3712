//! HTTP handlers and routing for the catalog

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;
pub mod health;

use axum::{response::Redirect, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Parse an id taken from the path. Malformed ids cannot match any entity,
/// so they are reported as not found.
pub(crate) fn parse_id(raw: &str, entity: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} {} not found", entity, raw)))
}

async fn fallback() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog") }))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Home
        .route("/catalog", get(catalog::index))
        .route("/catalog/", get(catalog::index))
        // Books
        .route("/catalog/book/create", get(books::book_create_get).post(books::book_create_post))
        .route("/catalog/book/:id/delete", get(books::book_delete_get).post(books::book_delete_post))
        .route("/catalog/book/:id/update", get(books::book_update_get).post(books::book_update_post))
        .route("/catalog/book/:id", get(books::book_detail))
        .route("/catalog/books", get(books::book_list))
        // Authors
        .route("/catalog/author/create", get(authors::author_create_get).post(authors::author_create_post))
        .route("/catalog/author/:id/delete", get(authors::author_delete_get).post(authors::author_delete_post))
        .route("/catalog/author/:id/update", get(authors::author_update_get).post(authors::author_update_post))
        .route("/catalog/author/:id", get(authors::author_detail))
        .route("/catalog/authors", get(authors::author_list))
        // Genres
        .route("/catalog/genre/create", get(genres::genre_create_get).post(genres::genre_create_post))
        .route("/catalog/genre/:id/delete", get(genres::genre_delete_get).post(genres::genre_delete_post))
        .route("/catalog/genre/:id/update", get(genres::genre_update_get).post(genres::genre_update_post))
        .route("/catalog/genre/:id", get(genres::genre_detail))
        .route("/catalog/genres", get(genres::genre_list))
        // Book instances
        .route(
            "/catalog/bookinstance/create",
            get(book_instances::bookinstance_create_get).post(book_instances::bookinstance_create_post),
        )
        .route(
            "/catalog/bookinstance/:id/delete",
            get(book_instances::bookinstance_delete_get).post(book_instances::bookinstance_delete_post),
        )
        .route(
            "/catalog/bookinstance/:id/update",
            get(book_instances::bookinstance_update_get).post(book_instances::bookinstance_update_post),
        )
        .route("/catalog/bookinstance/:id", get(book_instances::bookinstance_detail))
        .route("/catalog/bookinstances", get(book_instances::bookinstance_list))
        .fallback(fallback)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        models::Genre,
        repository::{MockCatalogStore, Repository},
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app(store: MockCatalogStore) -> Router {
        create_router(AppState::new(AppConfig::default(), Repository::new(store)))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn malformed_id_is_not_found() {
        assert!(matches!(parse_id("42", "Book"), Err(AppError::NotFound(_))));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Book").unwrap(), id);
    }

    #[tokio::test]
    async fn store_failure_on_list_is_a_server_error() {
        let mut store = MockCatalogStore::new();
        store
            .expect_genres_list()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let response = app(store).oneshot(get_request("/catalog/genres")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn one_failed_count_fails_the_home_page() {
        let mut store = MockCatalogStore::new();
        store.expect_books_count().returning(|| Ok(3));
        store.expect_book_instances_count().returning(|_| Ok(2));
        store.expect_authors_count().returning(|| Ok(1));
        store
            .expect_genres_count()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));

        let response = app(store).oneshot(get_request("/catalog")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn genre_create_with_existing_name_does_not_insert() {
        let existing = Genre {
            id: Uuid::new_v4(),
            name: "Poetry".to_string(),
        };
        let found = existing.clone();

        let mut store = MockCatalogStore::new();
        store
            .expect_genres_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        store.expect_genres_insert().never();

        let request = Request::builder()
            .method("POST")
            .uri("/catalog/genre/create")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("name=Poetry"))
            .unwrap();
        let response = app(store).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], existing.url().as_str());
    }

    #[tokio::test]
    async fn rename_refused_by_the_store_rerenders_form() {
        let mut store = MockCatalogStore::new();
        store.expect_genres_find_by_name().returning(|_| Ok(None));
        store
            .expect_genres_replace()
            .times(1)
            .returning(|g| Err(AppError::Conflict(format!("Genre {:?} already exists", g.name))));

        let request = Request::builder()
            .method("POST")
            .uri(format!("/catalog/genre/{}/update", Uuid::new_v4()))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("name=Poetry"))
            .unwrap();
        let response = app(store).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Genre name already exists."));
        assert!(html.contains(r#"value="Poetry""#));
    }
}

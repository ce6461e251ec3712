//! Home page, health and routing behaviour

mod common;

use axum::http::StatusCode;
use common::{body_text, build_test_app, get, location, seed_author, seed_book, seed_genre, seed_instance};
use library_catalog::models::BookInstanceStatus;

#[tokio::test]
async fn root_redirects_to_catalog() {
    let (app, _) = build_test_app();
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog");
}

#[tokio::test]
async fn index_shows_five_counts() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let sf = seed_genre(&repository, "Science Fiction").await;
    seed_genre(&repository, "Poetry").await;
    let dune = seed_book(&repository, "Dune", &author, &[&sf]).await;
    seed_book(&repository, "Dune Messiah", &author, &[&sf]).await;
    seed_instance(&repository, &dune, BookInstanceStatus::Available).await;
    seed_instance(&repository, &dune, BookInstanceStatus::Loaned).await;
    seed_instance(&repository, &dune, BookInstanceStatus::Maintenance).await;

    for uri in ["/catalog", "/catalog/"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"<span id="books">2</span>"#));
        assert!(body.contains(r#"<span id="book-instances">3</span>"#));
        assert!(body.contains(r#"<span id="book-instances-available">1</span>"#));
        assert!(body.contains(r#"<span id="authors">1</span>"#));
        assert!(body.contains(r#"<span id="genres">2</span>"#));
    }
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let (app, _) = build_test_app();
    let response = get(&app, "/catalog/nothing-here").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

#[tokio::test]
async fn health_and_readiness_report_json() {
    let (app, _) = build_test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());

    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ready");
}

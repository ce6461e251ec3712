//! Book copy pages and forms

mod common;

use axum::http::StatusCode;
use common::{
    body_text, build_test_app, get, location, post_form, seed_author, seed_book, seed_instance,
};
use library_catalog::models::BookInstanceStatus;
use uuid::Uuid;

#[tokio::test]
async fn create_form_offers_every_book() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;

    let html = body_text(get(&app, "/catalog/bookinstance/create").await).await;
    assert!(html.contains(&dune.id.to_string()));
    for status in BookInstanceStatus::ALL {
        assert!(html.contains(status.as_str()));
    }
}

#[tokio::test]
async fn invalid_status_rerenders_with_selection_kept() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;

    let body = format!("book={}&imprint=Chilton&due_back=&status=Lost", dune.id);
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Invalid status."));
    assert!(html.contains(r#"value="Chilton""#));
    assert!(html.contains("selected"));
    assert_eq!(repository.book_instances_count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn valid_copy_redirects_to_its_page() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;

    let body = format!("book={}&imprint=Chilton&due_back=2026-11-01&status=Loaned", dune.id);
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let copies = repository.book_instances_list().await.unwrap();
    assert_eq!(copies.len(), 1);
    assert_eq!(location(&response), copies[0].url());
    assert_eq!(copies[0].status, BookInstanceStatus::Loaned);
    assert_eq!(
        repository
            .book_instances_count(Some(BookInstanceStatus::Loaned))
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn detail_links_back_to_book() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;
    let copy = seed_instance(&repository, &dune, BookInstanceStatus::Reserved).await;

    let response = get(&app, &copy.url()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(&dune.url()));
    assert!(html.contains("Reserved"));
}

#[tokio::test]
async fn update_changes_status() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;
    let copy = seed_instance(&repository, &dune, BookInstanceStatus::Maintenance).await;

    let body = format!("book={}&imprint=Ace&due_back=&status=Available", dune.id);
    let response = post_form(&app, &format!("{}/update", copy.url()), &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), copy.url());

    let stored = repository.book_instances_get(copy.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookInstanceStatus::Available);
    assert_eq!(stored.imprint, "Ace");
}

#[tokio::test]
async fn delete_removes_copy() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;
    let copy = seed_instance(&repository, &dune, BookInstanceStatus::Available).await;
    let uri = format!("{}/delete", copy.url());

    assert_eq!(get(&app, &uri).await.status(), StatusCode::OK);

    let response = post_form(&app, &uri, "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog/bookinstances");
    assert!(repository.book_instances_get(copy.id).await.unwrap().is_none());

    let response = get(&app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_copy_is_not_found() {
    let (app, _) = build_test_app();
    let response = get(&app, &format!("/catalog/bookinstance/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_form_preselects_maintenance() {
    let (app, _) = build_test_app();

    let html = body_text(get(&app, "/catalog/bookinstance/create").await).await;
    assert!(html.contains(r#"<option value="Maintenance" selected>"#));
    assert_eq!(html.matches(" selected").count(), 1);
}

#[tokio::test]
async fn missing_status_defaults_to_maintenance() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let dune = seed_book(&repository, "Dune", &author, &[]).await;

    let body = format!("book={}&imprint=Ace", dune.id);
    let response = post_form(&app, "/catalog/bookinstance/create", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let copies = repository.book_instances_list().await.unwrap();
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].status, BookInstanceStatus::Maintenance);
    assert_eq!(copies[0].due_back, None);
}

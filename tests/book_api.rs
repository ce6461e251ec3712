//! Book pages and forms

mod common;

use axum::http::StatusCode;
use common::{
    body_text, build_test_app, get, location, post_form, seed_author, seed_book, seed_genre,
    seed_instance,
};
use library_catalog::models::BookInstanceStatus;
use uuid::Uuid;

#[tokio::test]
async fn create_with_empty_title_rerenders_form() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Ursula", "Le Guin").await;
    let genre = seed_genre(&repository, "Fantasy").await;

    let body = format!(
        "title=+++&author={}&summary=Wizards&isbn=978-0&genre={}",
        author.id, genre.id
    );
    let response = post_form(&app, "/catalog/book/create", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"data-field="title""#));
    assert!(html.contains("Title must not be empty."));
    // Submitted values survive the round trip
    assert!(html.contains(r#"value="978-0""#));
    assert!(html.contains("Wizards"));
    assert!(html.contains("checked"));
    assert_eq!(repository.books_count().await.unwrap(), 0);
}

#[tokio::test]
async fn create_with_all_fields_redirects_to_new_book() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Ursula", "Le Guin").await;
    let genre = seed_genre(&repository, "Fantasy").await;

    let body = format!(
        "title=A+Wizard+of+Earthsea&author={}&summary=Ged&isbn=9780547773742&genre={}",
        author.id, genre.id
    );
    let response = post_form(&app, "/catalog/book/create", &body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    let id: Uuid = target
        .strip_prefix("/catalog/book/")
        .expect("redirect to the book page")
        .parse()
        .unwrap();

    let book = repository.books_get(id).await.unwrap().unwrap();
    assert_eq!(book.title, "A Wizard of Earthsea");
    assert_eq!(book.author_id, author.id);
    assert_eq!(book.genre_ids, vec![genre.id]);
}

#[tokio::test]
async fn create_without_genres_stores_empty_list() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Mary", "Shelley").await;

    let body = format!("title=Frankenstein&author={}&summary=Monster&isbn=1", author.id);
    let response = post_form(&app, "/catalog/book/create", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let books = repository.books_list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert!(books[0].genre_ids.is_empty());
}

#[tokio::test]
async fn detail_shows_author_genres_and_copies() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let genre = seed_genre(&repository, "Science Fiction").await;
    let book = seed_book(&repository, "Dune", &author, &[&genre]).await;
    let copy = seed_instance(&repository, &book, BookInstanceStatus::Available).await;

    let response = get(&app, &book.url()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Herbert, Frank"));
    assert!(html.contains(&genre.url()));
    assert!(html.contains(&copy.url()));
}

#[tokio::test]
async fn detail_of_unknown_book_is_not_found() {
    let (app, _) = build_test_app();

    let response = get(&app, &format!("/catalog/book/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/catalog/book/not-an-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_form_checks_current_genres() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let sf = seed_genre(&repository, "Science Fiction").await;
    seed_genre(&repository, "Poetry").await;
    let book = seed_book(&repository, "Dune", &author, &[&sf]).await;

    let response = get(&app, &format!("{}/update", book.url())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_eq!(html.matches("checked").count(), 1);
    assert!(html.contains(r#"value="Dune""#));
    assert!(html.contains("selected"));
}

#[tokio::test]
async fn failed_update_keeps_submitted_values() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let book = seed_book(&repository, "Old Title", &author, &[]).await;

    let body = format!("title=New+Title&author={}&summary=&isbn=42", author.id);
    let response = post_form(&app, &format!("{}/update", book.url()), &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Summary must not be empty."));
    assert!(html.contains(r#"value="New Title""#));
    assert!(html.contains(r#"value="42""#));
    assert!(!html.contains("Old Title"));

    let stored = repository.books_get(book.id).await.unwrap().unwrap();
    assert_eq!(stored, book);
}

#[tokio::test]
async fn update_replaces_every_attribute() {
    let (app, repository) = build_test_app();
    let herbert = seed_author(&repository, "Frank", "Herbert").await;
    let asimov = seed_author(&repository, "Isaac", "Asimov").await;
    let sf = seed_genre(&repository, "Science Fiction").await;
    let book = seed_book(&repository, "Dune", &herbert, &[&sf]).await;

    let body = format!("title=Foundation&author={}&summary=Psychohistory&isbn=7", asimov.id);
    let response = post_form(&app, &format!("{}/update", book.url()), &body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), book.url());

    let stored = repository.books_get(book.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Foundation");
    assert_eq!(stored.author_id, asimov.id);
    assert!(stored.genre_ids.is_empty());
}

#[tokio::test]
async fn update_of_unknown_book_is_not_found() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let uri = format!("/catalog/book/{}/update", Uuid::new_v4());

    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);

    let body = format!("title=T&author={}&summary=S&isbn=I", author.id);
    assert_eq!(post_form(&app, &uri, &body).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_blocked_while_copies_exist() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    let book = seed_book(&repository, "Dune", &author, &[]).await;
    let copy = seed_instance(&repository, &book, BookInstanceStatus::Loaned).await;
    let uri = format!("{}/delete", book.url());

    let response = post_form(&app, &uri, "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(&copy.url()));
    assert!(repository.books_get(book.id).await.unwrap().is_some());

    repository.book_instances_delete(copy.id).await.unwrap();
    let response = post_form(&app, &uri, "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog/books");
    assert!(repository.books_get(book.id).await.unwrap().is_none());
}

#[tokio::test]
async fn list_shows_titles_with_authors() {
    let (app, repository) = build_test_app();
    let author = seed_author(&repository, "Frank", "Herbert").await;
    seed_book(&repository, "Dune", &author, &[]).await;

    let html = body_text(get(&app, "/catalog/books").await).await;
    assert!(html.contains("Dune"));
    assert!(html.contains("(Herbert, Frank)"));
}

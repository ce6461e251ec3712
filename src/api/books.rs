//! Book handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use uuid::Uuid;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    forms::{validate, CatalogForm, FormErrors, SubmittedForm},
    models::BookForm,
    views::{
        self,
        books::{BookDeleteView, BookFormView},
    },
    AppState,
};

const CREATE_TITLE: &str = "Create Book";
const UPDATE_TITLE: &str = "Update Book";

/// Display list of all books
pub async fn book_list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.books.list().await?;
    Ok(views::books::list(&books))
}

/// Display detail page for a specific book
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book")?;
    let detail = state.services.books.detail(id).await?;
    Ok(views::books::detail(&detail))
}

/// Display book create form
pub async fn book_create_get(State(state): State<AppState>) -> AppResult<Markup> {
    let (authors, genres) = state.services.books.form_options().await?;
    let view = BookFormView::new(CREATE_TITLE, BookForm::default(), authors, genres, FormErrors::new());
    Ok(views::books::form(&view))
}

/// Handle book create
pub async fn book_create_post(
    State(state): State<AppState>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let draft = BookForm::from_submitted(&submitted);
    let errors = validate(&draft);

    match draft.to_book(Uuid::new_v4()).filter(|_| errors.is_empty()) {
        Some(book) => {
            state.services.books.create(&book).await?;
            Ok(Redirect::to(&book.url()).into_response())
        }
        None => {
            let (authors, genres) = state.services.books.form_options().await?;
            let view = BookFormView::new(CREATE_TITLE, draft, authors, genres, errors);
            Ok(views::books::form(&view).into_response())
        }
    }
}

/// Display book update form
pub async fn book_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book")?;
    let (book, authors, genres) = state.services.books.edit(id).await?;
    let view = BookFormView::new(UPDATE_TITLE, BookForm::from(&book), authors, genres, FormErrors::new());
    Ok(views::books::form(&view))
}

/// Handle book update
pub async fn book_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book")?;
    let draft = BookForm {
        id: Some(id),
        ..BookForm::from_submitted(&submitted)
    };
    let errors = validate(&draft);

    match draft.to_book(id).filter(|_| errors.is_empty()) {
        Some(book) => {
            let updated = state.services.books.update(&book).await?;
            Ok(Redirect::to(&updated.url()).into_response())
        }
        None => {
            let (authors, genres) = state.services.books.form_options().await?;
            let view = BookFormView::new(UPDATE_TITLE, draft, authors, genres, errors);
            Ok(views::books::form(&view).into_response())
        }
    }
}

/// Display book delete confirmation
pub async fn book_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book")?;
    let (book, instances) = state
        .services
        .books
        .delete_check(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
    Ok(views::books::delete(&BookDeleteView { book, instances }))
}

/// Handle book delete; refused while copies exist
pub async fn book_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book")?;
    match state.services.books.delete_check(id).await? {
        Some((book, instances)) if !instances.is_empty() => {
            Ok(views::books::delete(&BookDeleteView { book, instances }).into_response())
        }
        Some(_) => {
            state.services.books.delete(id).await?;
            Ok(Redirect::to("/catalog/books").into_response())
        }
        None => Ok(Redirect::to("/catalog/books").into_response()),
    }
}

//! Book instance (copy) handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use uuid::Uuid;

use super::parse_id;
use crate::{
    error::AppResult,
    forms::{validate, CatalogForm, FormErrors, SubmittedForm},
    models::BookInstanceForm,
    views::{self, book_instances::BookInstanceFormView},
    AppState,
};

const CREATE_TITLE: &str = "Create BookInstance";
const UPDATE_TITLE: &str = "Update BookInstance";

/// Display list of all copies
pub async fn bookinstance_list(State(state): State<AppState>) -> AppResult<Markup> {
    let entries = state.services.book_instances.list().await?;
    Ok(views::book_instances::list(&entries))
}

/// Display detail page for a specific copy
pub async fn bookinstance_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book copy")?;
    let entry = state.services.book_instances.detail(id).await?;
    Ok(views::book_instances::detail(&entry))
}

/// Display copy create form
pub async fn bookinstance_create_get(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.book_instances.form_options().await?;
    let view = BookInstanceFormView::new(CREATE_TITLE, BookInstanceForm::default(), books, FormErrors::new());
    Ok(views::book_instances::form(&view))
}

/// Handle copy create
pub async fn bookinstance_create_post(
    State(state): State<AppState>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let draft = BookInstanceForm::from_submitted(&submitted);
    let errors = validate(&draft);

    match draft.to_instance(Uuid::new_v4()).filter(|_| errors.is_empty()) {
        Some(instance) => {
            state.services.book_instances.create(&instance).await?;
            Ok(Redirect::to(&instance.url()).into_response())
        }
        None => {
            let books = state.services.book_instances.form_options().await?;
            let view = BookInstanceFormView::new(CREATE_TITLE, draft, books, errors);
            Ok(views::book_instances::form(&view).into_response())
        }
    }
}

/// Display copy update form
pub async fn bookinstance_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book copy")?;
    let (instance, books) = state.services.book_instances.edit(id).await?;
    let view = BookInstanceFormView::new(
        UPDATE_TITLE,
        BookInstanceForm::from(&instance),
        books,
        FormErrors::new(),
    );
    Ok(views::book_instances::form(&view))
}

/// Handle copy update
pub async fn bookinstance_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book copy")?;
    let draft = BookInstanceForm {
        id: Some(id),
        ..BookInstanceForm::from_submitted(&submitted)
    };
    let errors = validate(&draft);

    match draft.to_instance(id).filter(|_| errors.is_empty()) {
        Some(instance) => {
            let updated = state.services.book_instances.update(&instance).await?;
            Ok(Redirect::to(&updated.url()).into_response())
        }
        None => {
            let books = state.services.book_instances.form_options().await?;
            let view = BookInstanceFormView::new(UPDATE_TITLE, draft, books, errors);
            Ok(views::book_instances::form(&view).into_response())
        }
    }
}

/// Display copy delete confirmation
pub async fn bookinstance_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book copy")?;
    let entry = state.services.book_instances.detail(id).await?;
    Ok(views::book_instances::delete(&entry))
}

/// Handle copy delete; copies have no dependents
pub async fn bookinstance_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book copy")?;
    state.services.book_instances.delete(id).await?;
    Ok(Redirect::to("/catalog/bookinstances").into_response())
}

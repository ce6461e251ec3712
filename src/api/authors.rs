//! Author handlers

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
    models::AuthorForm,
    views::{
        self,
        authors::{AuthorDeleteView, AuthorFormView},
    },
    AppState,
};

const CREATE_TITLE: &str = "Create Author";
const UPDATE_TITLE: &str = "Update Author";

fn form_page(title: &'static str, author: AuthorForm, errors: FormErrors) -> Markup {
    views::authors::form(&AuthorFormView {
        title,
        author,
        errors,
    })
}

/// Display list of all authors
pub async fn author_list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.services.authors.list().await?;
    Ok(views::authors::list(&authors))
}

/// Display detail page for a specific author
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Author")?;
    let detail = state.services.authors.detail(id).await?;
    Ok(views::authors::detail(&detail))
}

/// Display author create form
pub async fn author_create_get() -> Markup {
    form_page(CREATE_TITLE, AuthorForm::default(), FormErrors::new())
}

/// Handle author create
pub async fn author_create_post(
    State(state): State<AppState>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let draft = AuthorForm::from_submitted(&submitted);
    let errors = validate(&draft);

    match draft.to_author(Uuid::new_v4()).filter(|_| errors.is_empty()) {
        Some(author) => {
            state.services.authors.create(&author).await?;
            Ok(Redirect::to(&author.url()).into_response())
        }
        None => Ok(form_page(CREATE_TITLE, draft, errors).into_response()),
    }
}

/// Display author update form
pub async fn author_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Author")?;
    let author = state.services.authors.get(id).await?;
    Ok(form_page(UPDATE_TITLE, AuthorForm::from(&author), FormErrors::new()))
}

/// Handle author update
pub async fn author_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Author")?;
    let draft = AuthorForm {
        id: Some(id),
        ..AuthorForm::from_submitted(&submitted)
    };
    let errors = validate(&draft);

    match draft.to_author(id).filter(|_| errors.is_empty()) {
        Some(author) => {
            let updated = state.services.authors.update(&author).await?;
            Ok(Redirect::to(&updated.url()).into_response())
        }
        None => Ok(form_page(UPDATE_TITLE, draft, errors).into_response()),
    }
}

/// Display author delete confirmation
pub async fn author_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Author")?;
    let (author, books) = state
        .services
        .authors
        .delete_check(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
    Ok(views::authors::delete(&AuthorDeleteView { author, books }))
}

/// Handle author delete; refused while the author has books
pub async fn author_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Author")?;
    match state.services.authors.delete_check(id).await? {
        Some((author, books)) if !books.is_empty() => {
            Ok(views::authors::delete(&AuthorDeleteView { author, books }).into_response())
        }
        Some(_) => {
            state.services.authors.delete(id).await?;
            Ok(Redirect::to("/catalog/authors").into_response())
        }
        None => Ok(Redirect::to("/catalog/authors").into_response()),
    }
}

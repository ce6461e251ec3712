//! Genre handlers

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
    models::GenreForm,
    views::{
        self,
        genres::{GenreDeleteView, GenreFormView},
    },
    AppState,
};

const CREATE_TITLE: &str = "Create Genre";
const UPDATE_TITLE: &str = "Update Genre";

fn form_page(title: &'static str, genre: GenreForm, errors: FormErrors) -> Markup {
    views::genres::form(&GenreFormView {
        title,
        genre,
        errors,
    })
}

/// Display list of all genres
pub async fn genre_list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.services.genres.list().await?;
    Ok(views::genres::list(&genres))
}

/// Display detail page for a specific genre
pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Genre")?;
    let detail = state.services.genres.detail(id).await?;
    Ok(views::genres::detail(&detail))
}

/// Display genre create form
pub async fn genre_create_get() -> Markup {
    form_page(CREATE_TITLE, GenreForm::default(), FormErrors::new())
}

/// Handle genre create. A genre with the same name is reused, not duplicated.
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let draft = GenreForm::from_submitted(&submitted);
    let errors = validate(&draft);
    if !errors.is_empty() {
        return Ok(form_page(CREATE_TITLE, draft, errors).into_response());
    }

    let (genre, _) = state
        .services
        .genres
        .create(&draft.to_genre(Uuid::new_v4()))
        .await?;
    Ok(Redirect::to(&genre.url()).into_response())
}

/// Display genre update form
pub async fn genre_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Genre")?;
    let genre = state.services.genres.get(id).await?;
    Ok(form_page(UPDATE_TITLE, GenreForm::from(&genre), FormErrors::new()))
}

/// Handle genre update
pub async fn genre_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submitted): Form<SubmittedForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Genre")?;
    let draft = GenreForm {
        id: Some(id),
        ..GenreForm::from_submitted(&submitted)
    };
    let mut errors = validate(&draft);
    if !errors.is_empty() {
        return Ok(form_page(UPDATE_TITLE, draft, errors).into_response());
    }

    let genre = draft.to_genre(id);
    if state.services.genres.name_conflict(&genre).await?.is_some() {
        errors.push("name", "Genre name already exists.");
        return Ok(form_page(UPDATE_TITLE, draft, errors).into_response());
    }

    match state.services.genres.update(&genre).await {
        Ok(updated) => Ok(Redirect::to(&updated.url()).into_response()),
        // Lost a race with another rename to the same name
        Err(AppError::Conflict(_)) => {
            errors.push("name", "Genre name already exists.");
            Ok(form_page(UPDATE_TITLE, draft, errors).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Display genre delete confirmation
pub async fn genre_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Genre")?;
    let (genre, books) = state
        .services
        .genres
        .delete_check(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;
    Ok(views::genres::delete(&GenreDeleteView { genre, books }))
}

/// Handle genre delete; refused while books are filed under it
pub async fn genre_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Genre")?;
    match state.services.genres.delete_check(id).await? {
        Some((genre, books)) if !books.is_empty() => {
            Ok(views::genres::delete(&GenreDeleteView { genre, books }).into_response())
        }
        Some(_) => {
            state.services.genres.delete(id).await?;
            Ok(Redirect::to("/catalog/genres").into_response())
        }
        None => Ok(Redirect::to("/catalog/genres").into_response()),
    }
}

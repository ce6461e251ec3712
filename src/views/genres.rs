//! Genre pages

use maud::{html, Markup};

use super::{form_errors, layout, stored};
use crate::{
    forms::FormErrors,
    models::{Book, Genre, GenreDetail, GenreForm},
};

/// Everything the genre form renders
#[derive(Debug, Clone)]
pub struct GenreFormView {
    pub title: &'static str,
    pub genre: GenreForm,
    pub errors: FormErrors,
}

/// Genre delete confirmation
#[derive(Debug, Clone)]
pub struct GenreDeleteView {
    pub genre: Genre,
    pub books: Vec<Book>,
}

pub fn list(genres: &[Genre]) -> Markup {
    layout(
        "Genre List",
        html! {
            ul {
                @for genre in genres {
                    li { a href=(genre.url()) { (stored(&genre.name)) } }
                }
                @if genres.is_empty() {
                    li { "There are no genres." }
                }
            }
        },
    )
}

pub fn detail(detail: &GenreDetail) -> Markup {
    let genre = &detail.genre;
    layout(
        html! { "Genre: " (stored(&genre.name)) },
        html! {
            div.books {
                h4 { "Books" }
                dl {
                    @for book in &detail.books {
                        dt { a href=(book.url()) { (stored(&book.title)) } }
                        dd { (stored(&book.summary)) }
                    }
                }
                @if detail.books.is_empty() {
                    p { "This genre has no books." }
                }
            }
            hr;
            p {
                a href={ (genre.url()) "/update" } { "Update genre" }
                " | "
                a href={ (genre.url()) "/delete" } { "Delete genre" }
            }
        },
    )
}

pub fn form(view: &GenreFormView) -> Markup {
    layout(
        view.title,
        html! {
            (form_errors(&view.errors))
            form method="POST" action="" {
                div.form-group {
                    label for="name" { "Genre:" }
                    input #name type="text" name="name" placeholder="Fantasy, Poetry etc." value=(stored(&view.genre.name));
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete(view: &GenreDeleteView) -> Markup {
    let genre = &view.genre;
    layout(
        html! { "Delete Genre: " (stored(&genre.name)) },
        html! {
            @if !view.books.is_empty() {
                p { strong { "Delete or re-file the following books before attempting to delete this genre." } }
                ul.dependents {
                    @for book in &view.books {
                        li { a href=(book.url()) { (stored(&book.title)) } }
                    }
                }
            } @else {
                p { "Do you really want to delete this genre?" }
                form method="POST" action="" {
                    input type="hidden" name="id" value=(genre.id.to_string());
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}

//! HTML views
//!
//! One module per resource; every page is a function taking the data it
//! renders. Catalog text is stored the way forms sanitize it (trimmed and
//! HTML-escaped), so it is emitted through [`stored`] instead of being
//! escaped a second time.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod error;
pub mod genres;

use maud::{html, Markup, PreEscaped, Render, DOCTYPE};

use crate::forms::FormErrors;

/// Text that went through form sanitizing on its way into the store
pub(crate) fn stored(value: &str) -> PreEscaped<&str> {
    PreEscaped(value)
}

/// Page shell with the catalog navigation
pub fn layout(title: impl Render, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (&title) " | Local Library" }
            }
            body {
                nav.sidebar {
                    ul {
                        li { a href="/catalog" { "Home" } }
                        li { a href="/catalog/books" { "All books" } }
                        li { a href="/catalog/authors" { "All authors" } }
                        li { a href="/catalog/genres" { "All genres" } }
                        li { a href="/catalog/bookinstances" { "All book-instances" } }
                        li { hr; }
                        li { a href="/catalog/author/create" { "Create new author" } }
                        li { a href="/catalog/genre/create" { "Create new genre" } }
                        li { a href="/catalog/book/create" { "Create new book" } }
                        li { a href="/catalog/bookinstance/create" { "Create new book instance (copy)" } }
                    }
                }
                main.content {
                    h1 { (&title) }
                    (content)
                }
            }
        }
    }
}

/// Validation messages above a re-rendered form
pub fn form_errors(errors: &FormErrors) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul.errors {
                @for error in errors {
                    li data-field=(error.field) { (error.message) }
                }
            }
        }
    }
}

//! Author pages

use maud::{html, Markup};

use super::{form_errors, layout, stored};
use crate::{
    forms::FormErrors,
    models::{Author, AuthorDetail, AuthorForm, Book},
};

/// Everything the author form renders
#[derive(Debug, Clone)]
pub struct AuthorFormView {
    pub title: &'static str,
    pub author: AuthorForm,
    pub errors: FormErrors,
}

/// Author delete confirmation
#[derive(Debug, Clone)]
pub struct AuthorDeleteView {
    pub author: Author,
    pub books: Vec<Book>,
}

pub fn list(authors: &[Author]) -> Markup {
    layout(
        "Author List",
        html! {
            ul {
                @for author in authors {
                    li {
                        a href=(author.url()) { (stored(&author.name())) }
                        " (" (author.lifespan()) ")"
                    }
                }
                @if authors.is_empty() {
                    li { "There are no authors." }
                }
            }
        },
    )
}

pub fn detail(detail: &AuthorDetail) -> Markup {
    let author = &detail.author;
    layout(
        html! { "Author: " (stored(&author.name())) },
        html! {
            p { (author.lifespan()) }
            div.books {
                h4 { "Books" }
                dl {
                    @for book in &detail.books {
                        dt { a href=(book.url()) { (stored(&book.title)) } }
                        dd { (stored(&book.summary)) }
                    }
                }
                @if detail.books.is_empty() {
                    p { "This author has no books." }
                }
            }
            hr;
            p {
                a href={ (author.url()) "/update" } { "Update author" }
                " | "
                a href={ (author.url()) "/delete" } { "Delete author" }
            }
        },
    )
}

pub fn form(view: &AuthorFormView) -> Markup {
    let author = &view.author;
    layout(
        view.title,
        html! {
            (form_errors(&view.errors))
            form method="POST" action="" {
                div.form-group {
                    label for="first_name" { "First Name:" }
                    input #first_name type="text" name="first_name" placeholder="First name" value=(stored(&author.first_name));
                    label for="family_name" { "Family Name:" }
                    input #family_name type="text" name="family_name" placeholder="Family name" value=(stored(&author.family_name));
                }
                div.form-group {
                    label for="date_of_birth" { "Date of birth:" }
                    input #date_of_birth type="date" name="date_of_birth" value=(stored(&author.date_of_birth));
                }
                div.form-group {
                    label for="date_of_death" { "Date of death:" }
                    input #date_of_death type="date" name="date_of_death" value=(stored(&author.date_of_death));
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete(view: &AuthorDeleteView) -> Markup {
    let author = &view.author;
    layout(
        html! { "Delete Author: " (stored(&author.name())) },
        html! {
            p { (author.lifespan()) }
            @if !view.books.is_empty() {
                p { strong { "Delete the following books before attempting to delete this author." } }
                ul.dependents {
                    @for book in &view.books {
                        li { a href=(book.url()) { (stored(&book.title)) } }
                    }
                }
            } @else {
                p { "Do you really want to delete this author?" }
                form method="POST" action="" {
                    input type="hidden" name="id" value=(author.id.to_string());
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}

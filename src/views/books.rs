//! Book pages

use maud::{html, Markup};
use uuid::Uuid;

use super::{form_errors, layout, stored};
use crate::{
    forms::FormErrors,
    models::{Author, Book, BookDetail, BookForm, BookInstance, BookInstanceStatus, BookListEntry, Genre},
};

/// Author choice in the book form
#[derive(Debug, Clone)]
pub struct AuthorOption {
    pub author: Author,
    pub selected: bool,
}

/// Genre checkbox in the book form
#[derive(Debug, Clone)]
pub struct GenreOption {
    pub genre: Genre,
    pub checked: bool,
}

/// Everything the book form renders
#[derive(Debug, Clone)]
pub struct BookFormView {
    pub title: &'static str,
    pub book: BookForm,
    pub authors: Vec<AuthorOption>,
    pub genres: Vec<GenreOption>,
    pub errors: FormErrors,
}

impl BookFormView {
    /// Mark the options the draft already selects. Fetched entities are
    /// left as they are.
    pub fn new(
        title: &'static str,
        book: BookForm,
        authors: Vec<Author>,
        genres: Vec<Genre>,
        errors: FormErrors,
    ) -> Self {
        let selected_author = Uuid::parse_str(&book.author).ok();
        let authors = authors
            .into_iter()
            .map(|author| AuthorOption {
                selected: Some(author.id) == selected_author,
                author,
            })
            .collect();
        let genres = genres
            .into_iter()
            .map(|genre| GenreOption {
                checked: book.has_genre(genre.id),
                genre,
            })
            .collect();

        Self {
            title,
            book,
            authors,
            genres,
            errors,
        }
    }
}

/// Book delete confirmation
#[derive(Debug, Clone)]
pub struct BookDeleteView {
    pub book: Book,
    pub instances: Vec<BookInstance>,
}

pub fn list(books: &[BookListEntry]) -> Markup {
    layout(
        "Book List",
        html! {
            ul {
                @for entry in books {
                    li {
                        a href=(entry.book.url()) { (stored(&entry.book.title)) }
                        @if let Some(author) = &entry.author {
                            " (" (stored(&author.name())) ")"
                        }
                    }
                }
                @if books.is_empty() {
                    li { "There are no books." }
                }
            }
        },
    )
}

pub fn detail(detail: &BookDetail) -> Markup {
    let book = &detail.book;
    layout(
        html! { "Title: " (stored(&book.title)) },
        html! {
            p {
                strong { "Author: " }
                @if let Some(author) = &detail.author {
                    a href=(author.url()) { (stored(&author.name())) }
                } @else {
                    "Unknown"
                }
            }
            p { strong { "Summary: " } (stored(&book.summary)) }
            p { strong { "ISBN: " } (stored(&book.isbn)) }
            p {
                strong { "Genre: " }
                @for (i, genre) in detail.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (stored(&genre.name)) }
                }
            }
            div.copies {
                h4 { "Copies" }
                @for instance in &detail.instances {
                    hr;
                    p class=(status_class(instance.status)) { (instance.status.as_str()) }
                    p { strong { "Imprint: " } (stored(&instance.imprint)) }
                    @if instance.status != BookInstanceStatus::Available {
                        p { strong { "Due back: " } (instance.due_back_formatted()) }
                    }
                    p { strong { "Id: " } a href=(instance.url()) { (instance.id.to_string()) } }
                }
                @if detail.instances.is_empty() {
                    p { "There are no copies of this book in the library." }
                }
            }
            hr;
            p {
                a href={ (book.url()) "/update" } { "Update book" }
                " | "
                a href={ (book.url()) "/delete" } { "Delete book" }
            }
        },
    )
}

pub fn form(view: &BookFormView) -> Markup {
    let book = &view.book;
    layout(
        view.title,
        html! {
            (form_errors(&view.errors))
            form method="POST" action="" {
                div.form-group {
                    label for="title" { "Title:" }
                    input #title type="text" name="title" placeholder="Name of book" value=(stored(&book.title));
                }
                div.form-group {
                    label for="author" { "Author:" }
                    select #author name="author" {
                        option value="" { "--Please select an author--" }
                        @for option in &view.authors {
                            option value=(option.author.id.to_string()) selected[option.selected] {
                                (stored(&option.author.name()))
                            }
                        }
                    }
                }
                div.form-group {
                    label for="summary" { "Summary:" }
                    textarea #summary name="summary" placeholder="Summary" { (stored(&book.summary)) }
                }
                div.form-group {
                    label for="isbn" { "ISBN:" }
                    input #isbn type="text" name="isbn" placeholder="ISBN13" value=(stored(&book.isbn));
                }
                div.form-group {
                    label { "Genre:" }
                    @for option in &view.genres {
                        div.genre-option {
                            input type="checkbox" name="genre"
                                id=(option.genre.id.to_string())
                                value=(option.genre.id.to_string())
                                checked[option.checked];
                            label for=(option.genre.id.to_string()) { (stored(&option.genre.name)) }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete(view: &BookDeleteView) -> Markup {
    let book = &view.book;
    layout(
        html! { "Delete Book: " (stored(&book.title)) },
        html! {
            @if !view.instances.is_empty() {
                p { strong { "Delete the following copies before attempting to delete this book." } }
                ul.dependents {
                    @for instance in &view.instances {
                        li {
                            a href=(instance.url()) { (stored(&instance.imprint)) }
                            " - " (instance.status.as_str())
                        }
                    }
                }
            } @else {
                p { "Do you really want to delete this book?" }
                form method="POST" action="" {
                    input type="hidden" name="id" value=(book.id.to_string());
                    button type="submit" { "Delete" }
                }
            }
        },
    )
}

pub(crate) fn status_class(status: BookInstanceStatus) -> &'static str {
    match status {
        BookInstanceStatus::Available => "text-success",
        BookInstanceStatus::Maintenance => "text-danger",
        BookInstanceStatus::Loaned | BookInstanceStatus::Reserved => "text-warning",
    }
}

//! Book instance (copy) pages

use maud::{html, Markup};
use uuid::Uuid;

use super::{books::status_class, form_errors, layout, stored};
use crate::{
    forms::FormErrors,
    models::{Book, BookInstanceEntry, BookInstanceForm, BookInstanceStatus},
};

/// Book choice in the copy form
#[derive(Debug, Clone)]
pub struct BookOption {
    pub book: Book,
    pub selected: bool,
}

/// Everything the copy form renders
#[derive(Debug, Clone)]
pub struct BookInstanceFormView {
    pub title: &'static str,
    pub instance: BookInstanceForm,
    pub books: Vec<BookOption>,
    pub errors: FormErrors,
}

impl BookInstanceFormView {
    pub fn new(
        title: &'static str,
        instance: BookInstanceForm,
        books: Vec<Book>,
        errors: FormErrors,
    ) -> Self {
        let selected = Uuid::parse_str(&instance.book).ok();
        let books = books
            .into_iter()
            .map(|book| BookOption {
                selected: Some(book.id) == selected,
                book,
            })
            .collect();

        Self {
            title,
            instance,
            books,
            errors,
        }
    }
}

pub fn list(entries: &[BookInstanceEntry]) -> Markup {
    layout(
        "Book Instance List",
        html! {
            ul {
                @for entry in entries {
                    @let instance = &entry.instance;
                    li {
                        a href=(instance.url()) {
                            @if let Some(book) = &entry.book {
                                (stored(&book.title)) " : "
                            }
                            (stored(&instance.imprint))
                        }
                        " - "
                        span class=(status_class(instance.status)) { (instance.status.as_str()) }
                        @if instance.status != BookInstanceStatus::Available {
                            span { " (Due: " (instance.due_back_formatted()) ")" }
                        }
                    }
                }
                @if entries.is_empty() {
                    li { "There are no book copies in this library." }
                }
            }
        },
    )
}

pub fn detail(entry: &BookInstanceEntry) -> Markup {
    let instance = &entry.instance;
    layout(
        html! { "ID: " (instance.id.to_string()) },
        html! {
            p {
                strong { "Title: " }
                @if let Some(book) = &entry.book {
                    a href=(book.url()) { (stored(&book.title)) }
                } @else {
                    "Unknown"
                }
            }
            p { strong { "Imprint: " } (stored(&instance.imprint)) }
            p {
                strong { "Status: " }
                span class=(status_class(instance.status)) { (instance.status.as_str()) }
            }
            @if instance.status != BookInstanceStatus::Available {
                p { strong { "Due back: " } (instance.due_back_formatted()) }
            }
            hr;
            p {
                a href={ (instance.url()) "/update" } { "Update copy" }
                " | "
                a href={ (instance.url()) "/delete" } { "Delete copy" }
            }
        },
    )
}

pub fn form(view: &BookInstanceFormView) -> Markup {
    let instance = &view.instance;
    layout(
        view.title,
        html! {
            (form_errors(&view.errors))
            form method="POST" action="" {
                div.form-group {
                    label for="book" { "Book:" }
                    select #book name="book" {
                        option value="" { "--Please select a book--" }
                        @for option in &view.books {
                            option value=(option.book.id.to_string()) selected[option.selected] {
                                (stored(&option.book.title))
                            }
                        }
                    }
                }
                div.form-group {
                    label for="imprint" { "Imprint:" }
                    input #imprint type="text" name="imprint" placeholder="Publisher and date information" value=(stored(&instance.imprint));
                }
                div.form-group {
                    label for="due_back" { "Date when book available:" }
                    input #due_back type="date" name="due_back" value=(stored(&instance.due_back));
                }
                div.form-group {
                    label for="status" { "Status:" }
                    select #status name="status" {
                        option value="" { "--Please select a status--" }
                        @for status in BookInstanceStatus::ALL {
                            option value=(status.as_str()) selected[instance.status == status.as_str()] {
                                (status.as_str())
                            }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete(entry: &BookInstanceEntry) -> Markup {
    let instance = &entry.instance;
    layout(
        "Delete Book Copy",
        html! {
            p {
                strong { "Title: " }
                @if let Some(book) = &entry.book {
                    a href=(book.url()) { (stored(&book.title)) }
                }
            }
            p { strong { "Imprint: " } (stored(&instance.imprint)) }
            p { strong { "Status: " } (instance.status.as_str()) }
            p { "Do you really want to delete this copy?" }
            form method="POST" action="" {
                input type="hidden" name="id" value=(instance.id.to_string());
                button type="submit" { "Delete" }
            }
        },
    )
}

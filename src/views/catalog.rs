//! Home page

use maud::{html, Markup};

use crate::services::catalog::CatalogCounts;

pub fn index(counts: &CatalogCounts) -> Markup {
    super::layout(
        "Local Library Home",
        html! {
            p { "Welcome to " em { "LocalLibrary" } ", a very basic catalog of the library's holdings." }
            h2 { "Dynamic content" }
            p { "The library has the following record counts:" }
            ul.counts {
                li { strong { "Books:" } " " span #books { (counts.books) } }
                li { strong { "Copies:" } " " span #book-instances { (counts.book_instances) } }
                li { strong { "Copies available:" } " " span #book-instances-available { (counts.book_instances_available) } }
                li { strong { "Authors:" } " " span #authors { (counts.authors) } }
                li { strong { "Genres:" } " " span #genres { (counts.genres) } }
            }
        },
    )
}

//! Error page

use axum::http::StatusCode;
use maud::{html, Markup};

pub fn render(status: StatusCode, message: &str) -> Markup {
    super::layout(
        "Error",
        html! {
            h2 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p.message { (message) }
        },
    )
}

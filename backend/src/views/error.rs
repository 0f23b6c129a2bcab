// src/views/error.rs

use axum::http::StatusCode;

use crate::{models::section::Section, utils::html::escape, views::layout::render_page};

/// Renders an error page inside the regular shell.
pub fn render_error(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");

    let mut body = String::new();
    body.push_str("<section class=\"section-header error\">\n");
    body.push_str(&format!(
        "<h2 data-status=\"{}\">{} {}</h2>\n",
        status.as_u16(),
        status.as_u16(),
        reason
    ));
    body.push_str(&format!("<p>{}</p>\n", escape(message)));
    body.push_str("<a class=\"btn-primary\" href=\"/\">Back to the introduction</a>\n");
    body.push_str("</section>\n");

    render_page(reason, 0, Section::Introduction, &body)
}

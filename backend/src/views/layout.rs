// src/views/layout.rs

use crate::{
    assessment::progress::nav_items,
    models::section::Section,
    utils::html::escape,
};

/// Wraps page content in the shared shell: header, progress bar and the
/// five-item navigation strip.
///
/// `progress` is supplied by the caller; the shell owns no state.
pub fn render_page(title: &str, progress: u8, current: Section, body: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | MEAN Stack Readiness</title>\n",
        escape(title)
    ));
    html.push_str("<link rel=\"stylesheet\" href=\"/static/app.css\">\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header class=\"shell-header\">\n");
    html.push_str("<h1 class=\"brand\">MEAN Stack Readiness</h1>\n");
    html.push_str(&format!(
        "<span class=\"badge\" data-progress=\"{0}\">{0}% Complete</span>\n",
        progress
    ));
    html.push_str(&format!(
        "<div class=\"progress\"><div class=\"progress-bar\" style=\"width: {}%\"></div></div>\n",
        progress
    ));
    html.push_str("</header>\n");

    // Navigation tabs
    html.push_str("<nav class=\"shell-nav\">\n");
    for item in nav_items(progress, current) {
        let mut classes = vec!["nav-item"];
        if item.active {
            classes.push("active");
        } else if item.completed {
            classes.push("completed");
        }
        html.push_str(&format!(
            "<a href=\"{}\" class=\"{}\">{}",
            item.path,
            classes.join(" "),
            escape(item.label)
        ));
        if item.completed && !item.active {
            html.push_str("<span class=\"done-dot\"></span>");
        }
        html.push_str("</a>\n");
    }
    html.push_str("</nav>\n");

    html.push_str("<main class=\"container\">\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

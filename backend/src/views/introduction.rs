// src/views/introduction.rs

use crate::{models::section::Section, utils::html::escape, views::layout::render_page};

const STACK: [(&str, &str, &str); 4] = [
    ("MongoDB", "NoSQL database for flexible data storage", "Database"),
    ("Express.js", "Backend web framework for Node.js", "Backend"),
    ("Angular", "Frontend framework for dynamic web apps", "Frontend"),
    ("Node.js", "Server-side JavaScript runtime environment", "Runtime"),
];

const ROLES: [(&str, &str); 3] = [
    ("Full Stack Developer", "End-to-end web application development"),
    ("Frontend Developer", "UI building using Angular framework"),
    ("Backend Developer", "Server logic with Node.js & Express"),
];

const TRAITS: [(&str, &str); 4] = [
    ("Problem-Solver", "Enjoys debugging and finding creative solutions"),
    ("Self-Learner", "Continuously adapts to new technologies"),
    ("Logical Thinker", "Approaches problems systematically"),
    ("Full-Stack Mindset", "Enjoys working across frontend and backend"),
];

fn cards(items: impl IntoIterator<Item = String>) -> String {
    let mut html = String::from("<div class=\"cards\">\n");
    for item in items {
        html.push_str(&item);
    }
    html.push_str("</div>\n");
    html
}

pub fn render_introduction() -> String {
    let mut body = String::new();

    body.push_str("<section class=\"hero\">\n");
    body.push_str("<h2>Discover Your MEAN Stack Potential</h2>\n");
    body.push_str("<p>A research-backed assessment of your psychological fit, technical aptitude and career readiness for MEAN Stack development.</p>\n");
    body.push_str("<ul class=\"facts\"><li>25-30 minutes</li><li>Personalized Results</li><li>Career Guidance</li></ul>\n");
    body.push_str("<form method=\"post\" action=\"/start\"><button type=\"submit\" class=\"btn-primary\">Start Assessment</button></form>\n");
    body.push_str("</section>\n");

    body.push_str("<section>\n<h2>What is the MEAN Stack?</h2>\n");
    body.push_str(&cards(STACK.iter().map(|(name, description, badge)| {
        format!(
            "<div class=\"card\"><h3>{}</h3><p>{}</p><span class=\"badge\">{}</span></div>\n",
            name, description, badge
        )
    })));
    body.push_str("<h3>Common Career Roles</h3>\n");
    body.push_str(&cards(ROLES.iter().map(|(role, description)| {
        format!(
            "<div class=\"card\"><h4>{}</h4><p>{}</p></div>\n",
            role,
            escape(description)
        )
    })));
    body.push_str("</section>\n");

    body.push_str("<section>\n<h2>Personality Traits That Succeed</h2>\n");
    body.push_str("<p>Successful MEAN Stack developers typically exhibit these characteristics</p>\n");
    body.push_str(&cards(TRAITS.iter().map(|(name, description)| {
        format!(
            "<div class=\"card\"><h4>{}</h4><p>{}</p></div>\n",
            name, description
        )
    })));
    body.push_str("</section>\n");

    body.push_str("<section class=\"sections-overview\">\n<h2>Ready to Discover Your Potential?</h2>\n<ol>\n");
    for section in Section::ALL.into_iter().skip(1) {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            section.path(),
            section.label()
        ));
    }
    body.push_str("</ol>\n</section>\n");

    render_page("Introduction", 0, Section::Introduction, &body)
}

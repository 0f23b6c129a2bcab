// src/views/results.rs

use crate::{
    models::{
        question::WiscarDimension,
        result::{Recommendation, ResultSummary, ScoreBand},
        section::Section,
    },
    views::layout::render_page,
};

const LEARNING_STEPS: [(&str, &str); 3] = [
    (
        "Strengthen JavaScript Fundamentals",
        "Focus on ES6+, async/await, and DOM manipulation",
    ),
    (
        "Start with Node.js Basics",
        "Learn server-side JavaScript and NPM package management",
    ),
    (
        "Join Developer Communities",
        "Connect with MEAN Stack developers on GitHub and Discord",
    ),
];

const TIMELINE: [(&str, &str); 3] = [
    ("Months 1-2: Foundations", "JavaScript, HTML/CSS, Git basics"),
    ("Months 3-4: Backend", "Node.js, Express.js, MongoDB"),
    ("Months 5-6: Frontend", "Angular framework and integration"),
];

fn recommendation_note(rec: Recommendation) -> &'static str {
    match rec {
        Recommendation::Yes => {
            "Strong alignment across psychological, technical, and motivational factors."
        }
        Recommendation::Maybe => {
            "Promising fit, with a few areas worth strengthening before committing."
        }
        Recommendation::No => {
            "Current answers suggest focusing on programming fundamentals first."
        }
    }
}

fn overall_label(rec: Recommendation) -> &'static str {
    match rec {
        Recommendation::Yes => "Highly Compatible",
        Recommendation::Maybe => "Compatible",
        Recommendation::No => "Needs Preparation",
    }
}

fn confidence_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "High Confidence",
        ScoreBand::Moderate => "Moderate Confidence",
        ScoreBand::Weak => "Low Confidence",
    }
}

fn section_note(section: Section, band: ScoreBand) -> &'static str {
    match (section, band) {
        (Section::PsychologicalFit, ScoreBand::Strong) => {
            "Strong personality alignment with MEAN Stack development traits."
        }
        (Section::TechnicalAptitude, ScoreBand::Moderate | ScoreBand::Strong) => {
            "Good technical foundation with room for growth in specific areas."
        }
        (Section::WiscarAnalysis, ScoreBand::Strong | ScoreBand::Moderate) => {
            "Solid readiness across the six WISCAR dimensions."
        }
        (_, ScoreBand::Strong | ScoreBand::Moderate) => "Good alignment, with room to grow.",
        (_, ScoreBand::Weak) => "An area to focus on before diving in.",
    }
}

fn score_card(title: &str, score: u8, note: &str) -> String {
    let band = ScoreBand::from_score(score);
    format!(
        "<div class=\"card score-card\"><h3>{}</h3><span class=\"score {}\">{}/100</span>\
         <div class=\"progress\"><div class=\"progress-bar\" style=\"width: {}%\"></div></div>\
         <p>{}</p></div>\n",
        title,
        band.css_class(),
        score,
        score,
        note
    )
}

/// Renders the results dashboard for a summary.
pub fn render_results(summary: &ResultSummary) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"section-header\">\n");
    body.push_str("<h2>Your MEAN Stack Readiness Results</h2>\n");
    body.push_str("<p>Comprehensive analysis of your psychological fit, technical readiness, and career potential for MEAN Stack development.</p>\n");
    body.push_str("</section>\n");

    // Summary row
    let overall_band = ScoreBand::from_score(summary.overall_score);
    let confidence_band = ScoreBand::from_score(summary.confidence);
    body.push_str("<section class=\"cards summary\">\n");
    body.push_str(&format!(
        "<div class=\"card\"><h3>Recommendation</h3>\
         <span class=\"badge recommendation\" data-recommendation=\"{0}\">{0}</span>\
         <h4>{1}</h4><p>{2}</p></div>\n",
        summary.recommendation,
        summary.recommendation.headline(),
        recommendation_note(summary.recommendation)
    ));
    body.push_str(&format!(
        "<div class=\"card\"><h3>Overall Readiness Score</h3>\
         <span class=\"score {}\" data-overall=\"{}\">{}</span><h4>{}</h4></div>\n",
        overall_band.css_class(),
        summary.overall_score,
        summary.overall_score,
        overall_label(summary.recommendation)
    ));
    body.push_str(&format!(
        "<div class=\"card\"><h3>Confidence Level</h3>\
         <span class=\"score\" data-confidence=\"{0}\">{0}%</span><h4>{1}</h4></div>\n",
        summary.confidence,
        confidence_label(confidence_band)
    ));
    body.push_str("</section>\n");

    // Section scores
    let scores = summary.section_scores;
    body.push_str("<section class=\"cards sections\">\n");
    for (section, title, score) in [
        (Section::PsychologicalFit, "Psychological Fit", scores.psychological),
        (Section::TechnicalAptitude, "Technical Aptitude", scores.technical),
        (Section::WiscarAnalysis, "WISCAR Analysis", scores.wiscar),
    ] {
        body.push_str(&score_card(
            title,
            score,
            section_note(section, ScoreBand::from_score(score)),
        ));
    }
    body.push_str("</section>\n");

    // WISCAR grid
    body.push_str("<section class=\"wiscar\">\n<h2>WISCAR Dimensional Analysis</h2>\n");
    body.push_str("<p>Your readiness profile across six key dimensions</p>\n<div class=\"cards\">\n");
    for dimension in WiscarDimension::ALL {
        let score = summary.wiscar_scores.get(dimension);
        body.push_str(&format!(
            "<div class=\"card dimension\"><h4>{}</h4><span class=\"score {}\">{}</span></div>\n",
            dimension.label(),
            ScoreBand::from_score(score).css_class(),
            score
        ));
    }
    body.push_str("</div>\n</section>\n");

    // Learning path
    body.push_str("<section class=\"learning-path\">\n<h2>Your Personalized Learning Path</h2>\n");
    body.push_str("<p>Recommended steps to start your MEAN Stack journey</p>\n<ol>\n");
    for (step, detail) in LEARNING_STEPS {
        body.push_str(&format!("<li><strong>{}</strong><p>{}</p></li>\n", step, detail));
    }
    body.push_str("</ol>\n<h3>Learning Timeline</h3>\n<ul>\n");
    for (period, topics) in TIMELINE {
        body.push_str(&format!("<li><strong>{}</strong><p>{}</p></li>\n", period, topics));
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str("<section class=\"actions\">\n");
    body.push_str("<a class=\"btn-outline\" href=\"/results.json\" download>Download Report</a>\n");
    body.push_str("<form method=\"post\" action=\"/start\"><button type=\"submit\" class=\"btn-primary\">Retake Assessment</button></form>\n");
    body.push_str("</section>\n");

    render_page("Your Results", 100, Section::Results, &body)
}

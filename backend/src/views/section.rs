// src/views/section.rs

use crate::{
    assessment::{controller::SectionController, progress::display_progress},
    models::section::Section,
    utils::html::{escape, escape_multiline},
    views::layout::render_page,
};

/// Static copy of a question section page.
struct SectionCopy {
    title: &'static str,
    description: &'static str,
    back_label: &'static str,
    finish_label: &'static str,
    step_label: &'static str,
}

fn copy_for(section: Section) -> SectionCopy {
    match section {
        Section::TechnicalAptitude => SectionCopy {
            title: "Technical Aptitude Assessment",
            description: "This section evaluates your technical knowledge and problem-solving abilities relevant to MEAN Stack development.",
            back_label: "Back to Psychological Fit",
            finish_label: "Continue to WISCAR Analysis",
            step_label: "Progress",
        },
        Section::WiscarAnalysis => SectionCopy {
            title: "WISCAR Framework Analysis",
            description: "This section provides a holistic 6-dimensional view of your readiness for MEAN Stack development using the proven WISCAR model.",
            back_label: "Back to Technical Assessment",
            finish_label: "See Your Results",
            step_label: "WISCAR Progress",
        },
        _ => SectionCopy {
            title: "Psychological Fit Assessment",
            description: "This section evaluates your psychological and motivational alignment with MEAN Stack development through validated personality assessments.",
            back_label: "Back to Introduction",
            finish_label: "Continue to Technical Assessment",
            step_label: "Progress",
        },
    }
}

/// Renders the current question of a section with its answer buttons and
/// the Previous/Next controls. Next is disabled until the question is answered.
pub fn render_section(ctrl: &SectionController) -> String {
    let section = ctrl.section();
    let copy = copy_for(section);
    let path = section.path();
    let number = ctrl.current_index() + 1;
    let count = ctrl.question_count();
    let selected = ctrl.answer_for(ctrl.current_index());

    let mut body = String::new();

    body.push_str("<section class=\"section-header\">\n");
    body.push_str(&format!("<h2>{}</h2>\n", copy.title));
    body.push_str(&format!("<p>{}</p>\n", copy.description));
    body.push_str("</section>\n");

    if let Some(question) = ctrl.current_question() {
        body.push_str("<article class=\"question-card\">\n");
        body.push_str("<div class=\"question-meta\">\n");
        body.push_str(&format!(
            "<span class=\"counter\">Question {} of {}</span>\n",
            number, count
        ));
        body.push_str(&format!(
            "<span class=\"category\">{}</span>\n",
            escape(question.category)
        ));
        if let Some(difficulty) = question.difficulty {
            body.push_str(&format!(
                "<span class=\"difficulty difficulty-{}\">{}</span>\n",
                difficulty.label().to_ascii_lowercase(),
                difficulty.label()
            ));
        }
        body.push_str("</div>\n");
        body.push_str(&format!(
            "<h3 class=\"prompt\">{}</h3>\n",
            escape_multiline(question.prompt)
        ));

        body.push_str(&format!(
            "<form method=\"post\" action=\"{}\" class=\"options\">\n",
            path
        ));
        body.push_str("<input type=\"hidden\" name=\"action\" value=\"answer\">\n");
        for option in question.options {
            let is_selected = selected == Some(option.value);
            body.push_str(&format!(
                "<button type=\"submit\" name=\"value\" value=\"{}\" class=\"option{}\" aria-pressed=\"{}\">{}</button>\n",
                escape(option.value),
                if is_selected { " selected" } else { "" },
                is_selected,
                escape(option.label)
            ));
        }
        body.push_str("</form>\n");
        body.push_str("</article>\n");
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\" class=\"section-nav\">\n",
        path
    ));
    body.push_str(&format!(
        "<button type=\"submit\" name=\"action\" value=\"previous\" class=\"btn-outline\">{}</button>\n",
        if ctrl.current_index() == 0 { copy.back_label } else { "Previous" }
    ));
    body.push_str(&format!(
        "<span class=\"step\">{}: {}/{}</span>\n",
        copy.step_label, number, count
    ));
    body.push_str(&format!(
        "<button type=\"submit\" name=\"action\" value=\"next\" class=\"btn-primary\"{}>{}</button>\n",
        if ctrl.can_proceed() { "" } else { " disabled" },
        if ctrl.is_last_question() { copy.finish_label } else { "Next" }
    ));
    body.push_str("</form>\n");

    render_page(copy.title, display_progress(ctrl.progress()), section, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEXT_DISABLED: &str =
        "<button type=\"submit\" name=\"action\" value=\"next\" class=\"btn-primary\" disabled>";
    const NEXT_ENABLED: &str =
        "<button type=\"submit\" name=\"action\" value=\"next\" class=\"btn-primary\">";

    #[test]
    fn test_next_disabled_until_answered() {
        let mut ctrl = SectionController::new(Section::TechnicalAptitude);
        let html = render_section(&ctrl);
        assert!(html.contains(NEXT_DISABLED));
        assert!(html.contains("Question 1 of 8"));
        assert!(html.contains("Back to Psychological Fit"));

        ctrl.record_answer(0, "object");
        let html = render_section(&ctrl);
        assert!(html.contains(NEXT_ENABLED));
        assert!(html.contains("value=\"object\" class=\"option selected\" aria-pressed=\"true\""));
    }

    #[test]
    fn test_prompt_is_escaped_and_keeps_line_breaks() {
        let ctrl = SectionController::new(Section::TechnicalAptitude);
        let html = render_section(&ctrl);
        assert!(html.contains("code?<br><br>console.log(typeof null);"));
        assert!(html.contains("&quot;object&quot;"));
        assert!(html.contains("difficulty-basic"));
    }

    #[test]
    fn test_last_question_labels() {
        let mut ctrl = SectionController::new(Section::WiscarAnalysis);
        for i in 0..6 {
            ctrl.record_answer(i, "4");
            ctrl.advance();
        }
        let html = render_section(&ctrl);
        assert!(html.contains("Question 6 of 6"));
        assert!(html.contains("See Your Results"));
        assert!(html.contains("WISCAR Progress: 6/6"));
        assert!(html.contains(">Previous<"));
    }
}

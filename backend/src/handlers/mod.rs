// src/handlers/mod.rs

pub mod api;
pub mod pages;

use crate::{
    assessment::controller::SectionController,
    error::AppError,
    models::section::Section,
};

fn session_expired() -> AppError {
    AppError::AuthError("Session expired".to_string())
}

/// Accepts only the three sections that own questions.
fn question_section(section: Section) -> Result<Section, AppError> {
    if section.is_question_section() {
        Ok(section)
    } else {
        Err(AppError::NotFound(format!(
            "'{}' has no questions",
            section.label()
        )))
    }
}

/// Resolves a path slug to a question section; unknown slugs are a 404.
fn section_from_slug(slug: &str) -> Result<Section, AppError> {
    Section::from_slug(slug)
        .ok_or_else(|| AppError::NotFound(format!("Section '{}' not found", slug)))
        .and_then(question_section)
}

/// Records `value` after checking it names an option of the question at `index`.
fn record_checked(
    ctrl: &mut SectionController,
    index: usize,
    value: &str,
) -> Result<(), AppError> {
    let question = ctrl.question(index).ok_or_else(|| {
        AppError::BadRequest(format!("Question index {} is out of range", index))
    })?;

    if question.option(value).is_none() {
        return Err(AppError::BadRequest(format!(
            "'{}' is not an option of question {}",
            value, question.id
        )));
    }

    ctrl.record_answer(index, value);
    Ok(())
}

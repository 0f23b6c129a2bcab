// src/handlers/pages.rs

use axum::{
    Extension, Form, Json,
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    assessment::controller::SectionController,
    config::Config,
    error::{AppError, PageError},
    handlers::{record_checked, section_from_slug, session_expired},
    models::{
        answer::{FormAction, SectionForm},
        section::Section,
        session::Transition,
    },
    store::SessionStore,
    utils::session_token::CurrentSession,
    views::{
        introduction::render_introduction, results::render_results, section::render_section,
    },
};

/// Renders the introduction page.
pub async fn introduction() -> Html<String> {
    Html(render_introduction())
}

/// Starts (or restarts) the assessment with empty answer maps.
pub async fn start(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
) -> Result<Redirect, PageError> {
    if !store.reset(id).await {
        return Err(session_expired().into());
    }
    tracing::info!(session = %id, "Assessment started");
    Ok(Redirect::to(Section::PsychologicalFit.path()))
}

/// Renders a section page or the results dashboard.
pub async fn show(
    State(store): State<SessionStore>,
    State(config): State<Config>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let section = Section::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))?;

    let html = store
        .with_session(id, |session| match session.controller(section) {
            Some(ctrl) => render_section(ctrl),
            None => render_results(&session.summary(config.scoring_mode)),
        })
        .await
        .ok_or_else(session_expired)?;

    Ok(Html(html))
}

/// Handles the answer/next/previous buttons of a section page.
///
/// Always answers with a `303 See Other` to the page that should be shown
/// next, so a refresh never resubmits the form.
pub async fn submit(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
    Path(slug): Path<String>,
    Form(form): Form<SectionForm>,
) -> Result<Redirect, PageError> {
    let section = section_from_slug(&slug)?;

    let target = store
        .with_session(id, |session| match session.controller_mut(section) {
            Some(ctrl) => apply_action(ctrl, form),
            None => Err(AppError::NotFound(format!("'{}' has no questions", slug))),
        })
        .await
        .ok_or_else(session_expired)??;

    Ok(Redirect::to(target))
}

/// Downloads the results summary as a JSON file.
pub async fn download_results(
    State(store): State<SessionStore>,
    State(config): State<Config>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
) -> Result<impl IntoResponse, PageError> {
    let summary = store
        .with_session(id, |session| session.summary(config.scoring_mode))
        .await
        .ok_or_else(session_expired)?;

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"mean-readiness-results.json\"",
        )],
        Json(summary),
    ))
}

fn apply_action(ctrl: &mut SectionController, form: SectionForm) -> Result<&'static str, AppError> {
    let section = ctrl.section();
    let transition = match form.action {
        FormAction::Answer => {
            let value = form
                .value
                .ok_or_else(|| AppError::BadRequest("Missing answer value".to_string()))?;
            let index = ctrl.current_index();
            record_checked(ctrl, index, &value)?;
            return Ok(section.path());
        }
        FormAction::Next => Transition::Advance(ctrl.advance()),
        FormAction::Previous => Transition::Retreat(ctrl.retreat()),
    };

    tracing::debug!(?section, ?transition, "Section transition");
    Ok(transition.route(section))
}

// src/handlers/api.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    assessment::controller::SectionController,
    config::Config,
    error::AppError,
    handlers::{record_checked, section_from_slug, session_expired},
    models::{
        answer::SubmitAnswerRequest,
        result::ResultSummary,
        session::{
            AssessmentSession, CreateSessionResponse, SectionView, Transition, TransitionResponse,
        },
    },
    state::AppState,
    store::SessionStore,
    utils::session_token::{CurrentSession, sign_session_token},
};

/// Opens a new assessment session.
///
/// Returns 201 Created with a token to send as `Authorization: Bearer <token>`.
pub async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session_id = state.sessions.create().await;
    let token = sign_session_token(
        session_id,
        &state.config.session_secret,
        state.config.session_ttl,
    )?;

    tracing::info!(session = %session_id, "API session created");

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            token,
            session_id,
            expires_in: state.config.session_ttl,
        }),
    ))
}

/// Snapshot of the whole session: every controller with its answers.
pub async fn current_session(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
) -> Result<Json<AssessmentSession>, AppError> {
    let session = store
        .with_session(id, |session| session.clone())
        .await
        .ok_or_else(session_expired)?;

    Ok(Json(session))
}

/// Current question of a section.
pub async fn get_section(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
    Path(slug): Path<String>,
) -> Result<Json<SectionView>, AppError> {
    let section = section_from_slug(&slug)?;

    let view = store
        .with_session(id, |session| session.controller(section).map(SectionView::from))
        .await
        .ok_or_else(session_expired)?
        .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;

    Ok(Json(view))
}

/// Records the answer for question `index` of a section.
///
/// * The value must be one of the question's option tokens.
/// * Overwrites any earlier answer for the same index.
pub async fn put_answer(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
    Path((slug, index)): Path<(String, usize)>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SectionView>, AppError> {
    let section = section_from_slug(&slug)?;
    req.validate()?;

    let view = store
        .with_session(id, |session| {
            let ctrl = session
                .controller_mut(section)
                .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;
            record_checked(ctrl, index, &req.value)?;
            Ok::<_, AppError>(SectionView::from(&*ctrl))
        })
        .await
        .ok_or_else(session_expired)??;

    Ok(Json(view))
}

pub async fn advance(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
    Path(slug): Path<String>,
) -> Result<Json<TransitionResponse>, AppError> {
    transition(&store, id, &slug, |ctrl| Transition::Advance(ctrl.advance())).await
}

pub async fn retreat(
    State(store): State<SessionStore>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
    Path(slug): Path<String>,
) -> Result<Json<TransitionResponse>, AppError> {
    transition(&store, id, &slug, |ctrl| Transition::Retreat(ctrl.retreat())).await
}

async fn transition(
    store: &SessionStore,
    id: Uuid,
    slug: &str,
    step: impl FnOnce(&mut SectionController) -> Transition,
) -> Result<Json<TransitionResponse>, AppError> {
    let section = section_from_slug(slug)?;

    let response = store
        .with_session(id, |session| {
            session.controller_mut(section).map(|ctrl| {
                let outcome = step(ctrl);
                TransitionResponse {
                    outcome,
                    route: outcome.route(section),
                    view: SectionView::from(&*ctrl),
                }
            })
        })
        .await
        .ok_or_else(session_expired)?
        .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;

    tracing::debug!(?section, outcome = ?response.outcome, "API transition");
    Ok(Json(response))
}

/// Results summary for the session, according to the configured scoring mode.
pub async fn results(
    State(store): State<SessionStore>,
    State(config): State<Config>,
    Extension(CurrentSession(id)): Extension<CurrentSession>,
) -> Result<Json<ResultSummary>, AppError> {
    let summary = store
        .with_session(id, |session| session.summary(config.scoring_mode))
        .await
        .ok_or_else(session_expired)?;

    Ok(Json(summary))
}

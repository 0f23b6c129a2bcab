// src/models/session.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    assessment::{
        controller::{AdvanceOutcome, QuestionState, RetreatOutcome, SectionController},
        progress::display_progress,
        scoring::{self, SectionAnswers},
    },
    models::{
        question::Question,
        result::{ResultSummary, ScoringMode},
        section::Section,
    },
};

/// All questionnaire state of one visitor.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub psychological: SectionController,
    pub technical: SectionController,
    pub wiscar: SectionController,
}

impl AssessmentSession {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            last_seen: now,
            psychological: SectionController::new(Section::PsychologicalFit),
            technical: SectionController::new(Section::TechnicalAptitude),
            wiscar: SectionController::new(Section::WiscarAnalysis),
        }
    }

    /// Controller of a question section; `None` for Introduction and Results.
    pub fn controller(&self, section: Section) -> Option<&SectionController> {
        match section {
            Section::PsychologicalFit => Some(&self.psychological),
            Section::TechnicalAptitude => Some(&self.technical),
            Section::WiscarAnalysis => Some(&self.wiscar),
            Section::Introduction | Section::Results => None,
        }
    }

    pub fn controller_mut(&mut self, section: Section) -> Option<&mut SectionController> {
        match section {
            Section::PsychologicalFit => Some(&mut self.psychological),
            Section::TechnicalAptitude => Some(&mut self.technical),
            Section::WiscarAnalysis => Some(&mut self.wiscar),
            Section::Introduction | Section::Results => None,
        }
    }

    pub fn summary(&self, mode: ScoringMode) -> ResultSummary {
        scoring::summarize(
            mode,
            SectionAnswers {
                psychological: self.psychological.answers(),
                technical: self.technical.answers(),
                wiscar: self.wiscar.answers(),
            },
        )
    }
}

/// DTO returned when an API client opens a session.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub token: String,
    pub session_id: Uuid,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// DTO describing the question a section is currently on.
#[derive(Debug, Serialize)]
pub struct SectionView {
    pub section: Section,
    pub question_index: usize,
    pub question_count: usize,
    pub question: Option<&'static Question>,
    pub answer: QuestionState,
    pub can_proceed: bool,
    pub progress: u8,
}

impl From<&SectionController> for SectionView {
    fn from(ctrl: &SectionController) -> Self {
        Self {
            section: ctrl.section(),
            question_index: ctrl.current_index(),
            question_count: ctrl.question_count(),
            question: ctrl.current_question(),
            answer: ctrl.question_state(),
            can_proceed: ctrl.can_proceed(),
            progress: display_progress(ctrl.progress()),
        }
    }
}

/// Outcome of a navigation request, with the route the client should show.
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub outcome: Transition,
    pub route: &'static str,
    pub view: SectionView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Transition {
    Advance(AdvanceOutcome),
    Retreat(RetreatOutcome),
}

impl Transition {
    /// Route to show after the transition, given the section it happened in.
    pub fn route(self, section: Section) -> &'static str {
        let target = match self {
            Transition::Advance(AdvanceOutcome::Completed) => section.next(),
            Transition::Retreat(RetreatOutcome::ExitSection) => section.previous(),
            _ => None,
        };
        target.unwrap_or(section).path()
    }
}

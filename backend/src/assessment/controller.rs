// src/assessment/controller.rs

use serde::Serialize;

use crate::{
    assessment::{progress::SECTION_WEIGHT, question_bank},
    models::{answer::AnswerMap, question::Question, section::Section},
};

/// Whether the current question has an answer yet. Guards `advance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum QuestionState {
    Unanswered,
    Answered(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// Current question has no answer; nothing changed.
    Blocked,
    Moved,
    /// Last question answered; the caller moves on to the next section.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RetreatOutcome {
    Moved,
    /// Already at the first question; the caller leaves for the previous section.
    ExitSection,
}

/// Cursor and answers for one question section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionController {
    section: Section,
    #[serde(skip)]
    questions: &'static [Question],
    current_index: usize,
    answers: AnswerMap,
}

impl SectionController {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            questions: question_bank::questions_for(section),
            current_index: 0,
            answers: AnswerMap::new(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.questions.get(self.current_index)
    }

    pub fn question(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(index)
    }

    /// Stores `value` for `index`, replacing any previous answer.
    ///
    /// An index outside the section is ignored and `false` is returned.
    pub fn record_answer(&mut self, index: usize, value: impl Into<String>) -> bool {
        if index >= self.questions.len() {
            tracing::debug!(
                section = ?self.section,
                index,
                "Ignoring answer for out-of-range question"
            );
            return false;
        }
        self.answers.insert(index, value);
        true
    }

    pub fn question_state(&self) -> QuestionState {
        match self.answer_for(self.current_index) {
            Some(value) => QuestionState::Answered(value.to_string()),
            None => QuestionState::Unanswered,
        }
    }

    pub fn can_proceed(&self) -> bool {
        matches!(self.question_state(), QuestionState::Answered(_))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.can_proceed() {
            return AdvanceOutcome::Blocked;
        }
        if self.is_last_question() {
            return AdvanceOutcome::Completed;
        }
        self.current_index += 1;
        AdvanceOutcome::Moved
    }

    pub fn retreat(&mut self) -> RetreatOutcome {
        match self.current_index.checked_sub(1) {
            Some(prev) => {
                self.current_index = prev;
                RetreatOutcome::Moved
            }
            None => RetreatOutcome::ExitSection,
        }
    }

    /// `base + (index / count) * 25`, unrounded.
    pub fn progress(&self) -> f64 {
        let base = self.section.progress_base();
        if self.questions.is_empty() {
            return base;
        }
        base + (self.current_index as f64 / self.questions.len() as f64) * SECTION_WEIGHT
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        (0..self.questions.len()).all(|i| self.answers.get(i).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_blocked_without_answer() {
        for section in Section::QUESTION_SECTIONS {
            let mut ctrl = SectionController::new(section);
            assert_eq!(ctrl.advance(), AdvanceOutcome::Blocked);
            assert_eq!(ctrl.current_index(), 0);
            assert_eq!(ctrl.question_state(), QuestionState::Unanswered);
        }
    }

    #[test]
    fn test_advance_moves_then_completes() {
        let mut ctrl = SectionController::new(Section::PsychologicalFit);
        for i in 0..5 {
            assert!(ctrl.record_answer(i, "5"));
            assert_eq!(ctrl.advance(), AdvanceOutcome::Moved);
            assert_eq!(ctrl.current_index(), i + 1);
        }
        // Last question still unanswered
        assert_eq!(ctrl.advance(), AdvanceOutcome::Blocked);
        ctrl.record_answer(5, "5");
        assert_eq!(ctrl.advance(), AdvanceOutcome::Completed);
        assert_eq!(ctrl.current_index(), 5);
        assert_eq!(ctrl.advance(), AdvanceOutcome::Completed);
        assert!(ctrl.is_complete());
    }

    #[test]
    fn test_answer_persists_until_overwritten() {
        let mut ctrl = SectionController::new(Section::TechnicalAptitude);
        ctrl.record_answer(3, "put");
        assert_eq!(ctrl.answer_for(3), Some("put"));
        ctrl.record_answer(4, "nosql");
        assert_eq!(ctrl.answer_for(3), Some("put"));
        ctrl.record_answer(3, "post");
        assert_eq!(ctrl.answer_for(3), Some("post"));
    }

    #[test]
    fn test_record_answer_ignores_out_of_range_index() {
        let mut ctrl = SectionController::new(Section::WiscarAnalysis);
        assert!(!ctrl.record_answer(6, "5"));
        assert!(!ctrl.record_answer(usize::MAX, "5"));
        assert_eq!(ctrl.answered_count(), 0);
    }

    #[test]
    fn test_retreat_at_first_question_signals_exit() {
        let mut ctrl = SectionController::new(Section::PsychologicalFit);
        assert_eq!(ctrl.retreat(), RetreatOutcome::ExitSection);
        assert_eq!(ctrl.current_index(), 0);
        assert_eq!(ctrl.retreat(), RetreatOutcome::ExitSection);
        assert_eq!(ctrl.current_index(), 0);

        ctrl.record_answer(0, "3");
        ctrl.advance();
        assert_eq!(ctrl.retreat(), RetreatOutcome::Moved);
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn test_progress_formula() {
        let mut ctrl = SectionController::new(Section::PsychologicalFit);
        assert_eq!(ctrl.progress(), 25.0);
        for i in 0..3 {
            ctrl.record_answer(i, "4");
            ctrl.advance();
        }
        assert_eq!(ctrl.progress(), 37.5);
        assert_eq!(ctrl.progress().round() as u8, 38);
    }

    #[test]
    fn test_progress_is_monotonic() {
        for section in Section::QUESTION_SECTIONS {
            let mut ctrl = SectionController::new(section);
            let mut last = ctrl.progress();
            for i in 0..ctrl.question_count() {
                ctrl.record_answer(i, "x");
                ctrl.advance();
                let now = ctrl.progress();
                assert!(now >= last);
                assert!(now < section.progress_base() + SECTION_WEIGHT);
                last = now;
            }
        }
    }
}

// src/assessment/scoring.rs

use crate::{
    assessment::question_bank,
    models::{
        answer::AnswerMap,
        question::{Question, WiscarDimension},
        result::{Recommendation, ResultSummary, ScoringMode, SectionScores, WiscarScores},
    },
};

/// Overall score at or above which the recommendation is YES.
pub const YES_THRESHOLD: u8 = 70;
/// Overall score at or above which the recommendation is MAYBE.
pub const MAYBE_THRESHOLD: u8 = 50;

/// Answer maps of the three question sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionAnswers<'a> {
    pub psychological: &'a AnswerMap,
    pub technical: &'a AnswerMap,
    pub wiscar: &'a AnswerMap,
}

pub fn summarize(mode: ScoringMode, answers: SectionAnswers<'_>) -> ResultSummary {
    match mode {
        ScoringMode::Fixed => fixed_summary(),
        ScoringMode::Computed => compute_summary(answers),
    }
}

/// Dashboard constants shown regardless of what was answered.
pub fn fixed_summary() -> ResultSummary {
    ResultSummary {
        scoring_mode: ScoringMode::Fixed,
        overall_score: 78,
        confidence: 82,
        recommendation: Recommendation::Yes,
        section_scores: SectionScores {
            psychological: 85,
            technical: 72,
            wiscar: 76,
        },
        wiscar_scores: WiscarScores {
            will: 90,
            interest: 88,
            skill: 65,
            cognitive: 80,
            ability: 85,
            real_world: 70,
        },
    }
}

/// Derives every score from the answer maps.
///
/// * Likert answers (1-5) normalise to `(v - 1) / 4 * 100`.
/// * Technical score is the share of correct answers.
/// * Unanswered questions count as 0.
/// * Confidence is the share of all questions answered.
pub fn compute_summary(answers: SectionAnswers<'_>) -> ResultSummary {
    let psychological = likert_section_score(answers.psychological, &question_bank::PSYCHOLOGICAL);
    let (_, technical) = calculate_technical_score(answers.technical, &question_bank::TECHNICAL);

    let dimension = |dim: WiscarDimension| -> f64 {
        question_bank::WISCAR
            .iter()
            .position(|q| q.dimension == Some(dim))
            .and_then(|i| answers.wiscar.get(i))
            .and_then(likert_value)
            .unwrap_or(0.0)
    };
    let wiscar_raw: Vec<f64> = WiscarDimension::ALL.iter().map(|d| dimension(*d)).collect();
    let wiscar = mean(&wiscar_raw);

    let overall = to_score(mean(&[psychological, technical, wiscar]));

    let answered = answers.psychological.len() + answers.technical.len() + answers.wiscar.len();
    let total = question_bank::total_questions();
    let confidence = to_score(answered as f64 / total as f64 * 100.0);

    ResultSummary {
        scoring_mode: ScoringMode::Computed,
        overall_score: overall,
        confidence,
        recommendation: recommend(overall),
        section_scores: SectionScores {
            psychological: to_score(psychological),
            technical: to_score(technical),
            wiscar: to_score(wiscar),
        },
        wiscar_scores: WiscarScores {
            will: to_score(dimension(WiscarDimension::Will)),
            interest: to_score(dimension(WiscarDimension::Interest)),
            skill: to_score(dimension(WiscarDimension::Skill)),
            cognitive: to_score(dimension(WiscarDimension::Cognitive)),
            ability: to_score(dimension(WiscarDimension::Ability)),
            real_world: to_score(dimension(WiscarDimension::RealWorld)),
        },
    }
}

pub fn recommend(overall: u8) -> Recommendation {
    if overall >= YES_THRESHOLD {
        Recommendation::Yes
    } else if overall >= MAYBE_THRESHOLD {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}

/// Normalised 0-100 value of a Likert token, `None` if not in 1..=5.
fn likert_value(value: &str) -> Option<f64> {
    let v: u8 = value.parse().ok()?;
    (1..=5)
        .contains(&v)
        .then(|| f64::from(v - 1) / 4.0 * 100.0)
}

fn likert_section_score(answers: &AnswerMap, questions: &[Question]) -> f64 {
    let values: Vec<f64> = (0..questions.len())
        .map(|i| answers.get(i).and_then(likert_value).unwrap_or(0.0))
        .collect();
    mean(&values)
}

/// Returns (correct_count, score_percentage).
fn calculate_technical_score(answers: &AnswerMap, questions: &[Question]) -> (usize, f64) {
    if questions.is_empty() {
        return (0, 0.0);
    }

    let correct_count = answers
        .iter()
        .filter(|(i, value)| questions.get(*i).is_some_and(|q| q.is_correct(value)))
        .count();

    let score = (correct_count as f64 / questions.len() as f64) * 100.0;
    (correct_count, score)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

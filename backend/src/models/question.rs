// src/models/question.rs

use serde::Serialize;

/// A single selectable answer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    /// Token submitted by the form and stored in the answer map.
    pub value: &'static str,
    pub label: &'static str,
    /// Only meaningful for technical questions.
    #[serde(skip)]
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// The six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WiscarDimension::Will => "Will",
            WiscarDimension::Interest => "Interest",
            WiscarDimension::Skill => "Skill",
            WiscarDimension::Cognitive => "Cognitive",
            WiscarDimension::Ability => "Ability",
            WiscarDimension::RealWorld => "Real-World",
        }
    }
}

/// Immutable question record from the question bank.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u32,

    /// Category label for psychological/technical questions, or the
    /// dimension name for WISCAR questions.
    pub category: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<WiscarDimension>,

    pub prompt: &'static str,

    pub options: &'static [AnswerOption],
}

impl Question {
    /// Looks up an option by its submitted token.
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn is_correct(&self, value: &str) -> bool {
        self.option(value).is_some_and(|o| o.correct)
    }
}

// src/models/result.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::question::WiscarDimension;

/// How the results page obtains its numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Constant dashboard values, independent of answers.
    #[default]
    Fixed,
    /// Scores derived from the session's answer maps.
    Computed,
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(ScoringMode::Fixed),
            "computed" => Ok(ScoringMode::Computed),
            other => Err(format!("unknown scoring mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Yes => "YES",
            Recommendation::Maybe => "MAYBE",
            Recommendation::No => "NO",
        }
    }

    /// Headline shown under the recommendation badge.
    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Yes => "You Should Learn MEAN Stack!",
            Recommendation::Maybe => "MEAN Stack Could Work For You",
            Recommendation::No => "Consider Building Foundations First",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour band used when displaying a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Strong => "band-strong",
            ScoreBand::Moderate => "band-moderate",
            ScoreBand::Weak => "band-weak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionScores {
    pub psychological: u8,
    pub technical: u8,
    pub wiscar: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }
}

/// Everything the results dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub scoring_mode: ScoringMode,
    pub overall_score: u8,
    pub confidence: u8,
    pub recommendation: Recommendation,
    pub section_scores: SectionScores,
    pub wiscar_scores: WiscarScores,
}

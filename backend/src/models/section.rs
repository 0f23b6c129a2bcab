// src/models/section.rs

use serde::{Deserialize, Serialize};

/// The five pages of the assessment, in the order a visitor walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Introduction,
    PsychologicalFit,
    TechnicalAptitude,
    WiscarAnalysis,
    Results,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Introduction,
        Section::PsychologicalFit,
        Section::TechnicalAptitude,
        Section::WiscarAnalysis,
        Section::Results,
    ];

    /// Sections that own a question set and a controller.
    pub const QUESTION_SECTIONS: [Section; 3] = [
        Section::PsychologicalFit,
        Section::TechnicalAptitude,
        Section::WiscarAnalysis,
    ];

    /// Route path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Section::Introduction => "/",
            Section::PsychologicalFit => "/psychological-fit",
            Section::TechnicalAptitude => "/technical-aptitude",
            Section::WiscarAnalysis => "/wiscar-analysis",
            Section::Results => "/results",
        }
    }

    /// Path segment used by `/{slug}` routes. Introduction has none.
    pub fn slug(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| *s != Section::Introduction && s.slug() == slug)
    }

    /// Label shown in the navigation strip.
    pub fn label(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::PsychologicalFit => "Psychological Fit",
            Section::TechnicalAptitude => "Technical Aptitude",
            Section::WiscarAnalysis => "WISCAR Analysis",
            Section::Results => "Your Results",
        }
    }

    /// Progress at which this section starts (0, 25, 50, 75, 100).
    ///
    /// Doubles as the threshold the navigation strip compares against when
    /// deciding whether the item counts as completed.
    pub fn progress_base(self) -> f64 {
        match self {
            Section::Introduction => 0.0,
            Section::PsychologicalFit => 25.0,
            Section::TechnicalAptitude => 50.0,
            Section::WiscarAnalysis => 75.0,
            Section::Results => 100.0,
        }
    }

    pub fn is_question_section(self) -> bool {
        Self::QUESTION_SECTIONS.contains(&self)
    }

    pub fn next(self) -> Option<Self> {
        let pos = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(pos + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        let pos = Self::ALL.iter().position(|s| *s == self)?;
        pos.checked_sub(1).and_then(|p| Self::ALL.get(p).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_for_routable_sections() {
        for section in Section::ALL.into_iter().skip(1) {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
        }
        assert_eq!(Section::from_slug(""), None);
        assert_eq!(Section::from_slug("static"), None);
    }

    #[test]
    fn test_sequence_is_linear() {
        assert_eq!(Section::Introduction.previous(), None);
        assert_eq!(
            Section::PsychologicalFit.next(),
            Some(Section::TechnicalAptitude)
        );
        assert_eq!(
            Section::WiscarAnalysis.next(),
            Some(Section::Results)
        );
        assert_eq!(Section::Results.next(), None);
        assert_eq!(
            Section::PsychologicalFit.previous(),
            Some(Section::Introduction)
        );
    }

    #[test]
    fn test_serde_uses_route_slugs() {
        let json = serde_json::to_string(&Section::WiscarAnalysis).unwrap();
        assert_eq!(json, "\"wiscar-analysis\"");
        let parsed: Section = serde_json::from_str("\"technical-aptitude\"").unwrap();
        assert_eq!(parsed, Section::TechnicalAptitude);
    }
}

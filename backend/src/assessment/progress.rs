// src/assessment/progress.rs

use serde::Serialize;

use crate::models::section::Section;

/// Share of the overall progress bar owned by each question section.
pub const SECTION_WEIGHT: f64 = 25.0;

/// Rounds a raw progress value for display, clamped to 0..=100.
pub fn display_progress(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// One entry of the navigation strip.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub path: &'static str,
    pub completed: bool,
    pub active: bool,
}

/// Builds the fixed five-item navigation strip.
///
/// An item is completed once `progress` exceeds its section's base; the
/// Results item only at exactly 100.
pub fn nav_items(progress: u8, current: Section) -> Vec<NavItem> {
    Section::ALL
        .into_iter()
        .map(|section| {
            let threshold = section.progress_base();
            let completed = match section {
                Section::Results => progress == 100,
                _ => f64::from(progress) > threshold,
            };
            NavItem {
                section,
                label: section.label(),
                path: section.path(),
                completed,
                active: section == current,
            }
        })
        .collect()
}

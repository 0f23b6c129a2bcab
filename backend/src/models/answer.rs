// src/models/answer.rs

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shape of every option token in the question bank ("5", "two-way", ...).
static OPTION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("option token pattern"));

/// Selected option value per question index, for one section.
///
/// Entries are only ever inserted or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<usize, String>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn insert(&mut self, index: usize, value: impl Into<String>) {
        self.0.insert(index, value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(i, v)| (*i, v.as_str()))
    }
}

/// DTO for recording an answer through the JSON API.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(
        length(min = 1, max = 32, message = "Answer value must be between 1 and 32 characters."),
        regex(path = *OPTION_TOKEN, message = "Answer value is not a valid option token.")
    )]
    pub value: String,
}

/// Button pressed on a section page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    Answer,
    Next,
    Previous,
}

/// Form body posted by a section page.
#[derive(Debug, Deserialize)]
pub struct SectionForm {
    pub action: FormAction,
    pub value: Option<String>,
}

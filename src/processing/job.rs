//! Canonical job posting record

use serde::{Deserialize, Serialize};

/// One normalized posting, built once by the mapper and never mutated.
///
/// Application status and notes live in the tracker, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_text: String,
    pub salary_number: Option<f64>,
    pub url: String,
    pub description: String,
    pub posted: String,
    pub source: String,
    pub skills: Vec<String>,
}

impl Job {
    /// Skill list joined for substring searches
    pub fn skills_joined(&self) -> String {
        self.skills.join(" ")
    }
}

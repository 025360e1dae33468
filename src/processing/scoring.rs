//! Candidate-to-job skill overlap scoring

use crate::processing::job::Job;
use crate::processing::profile::SkillProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub overlap: usize,
    pub total: usize,
}

impl MatchResult {
    pub const EMPTY: MatchResult = MatchResult { score: 0, overlap: 0, total: 0 };

    pub fn class(&self) -> ScoreClass {
        score_class(self.score)
    }
}

/// Presentation bucket for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    Good,
    Warn,
    Bad,
}

impl ScoreClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreClass::Good => "good",
            ScoreClass::Warn => "warn",
            ScoreClass::Bad => "bad",
        }
    }
}

impl fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of `job_skills` present in `profile`, rounded half up.
///
/// A job without detected skills always scores zero.
pub fn score_match(profile: &SkillProfile, job_skills: &[String]) -> MatchResult {
    if job_skills.is_empty() {
        return MatchResult::EMPTY;
    }

    let overlap = job_skills
        .iter()
        .filter(|skill| profile.contains(&skill.to_lowercase()))
        .count();
    let total = job_skills.len();
    let score = ((overlap * 200 + total) / (2 * total)) as u32;

    MatchResult { score, overlap, total }
}

/// Order jobs by match score (highest first), then company and title,
/// both compared case-insensitively. Equal keys keep their input order.
pub fn rank_by_match<'a>(jobs: Vec<&'a Job>, profile: &SkillProfile) -> Vec<&'a Job> {
    let mut keyed: Vec<(u32, String, String, &'a Job)> = jobs
        .into_iter()
        .map(|job| {
            (
                score_match(profile, &job.skills).score,
                job.company.to_lowercase(),
                job.title.to_lowercase(),
                job,
            )
        })
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)).then_with(|| a.2.cmp(&b.2)));
    keyed.into_iter().map(|(_, _, _, job)| job).collect()
}

pub fn score_class(score: u32) -> ScoreClass {
    if score >= 70 {
        ScoreClass::Good
    } else if score >= 40 {
        ScoreClass::Warn
    } else {
        ScoreClass::Bad
    }
}

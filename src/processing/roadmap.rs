//! Gap-based weekly learning roadmap

use crate::processing::job::Job;
use crate::processing::profile::SkillProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_WEEKS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub week: usize,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPlan {
    pub job: Option<Job>,
    pub gaps: Vec<String>,
    pub plan: Vec<WeekBucket>,
}

impl RoadmapPlan {
    pub fn empty() -> Self {
        Self {
            job: None,
            gaps: Vec::new(),
            plan: Vec::new(),
        }
    }
}

/// How often each lowercased skill appears across `jobs`
pub fn skill_counts(jobs: &[Job]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for job in jobs {
        for skill in &job.skills {
            *counts.entry(skill.to_lowercase()).or_insert(0) += 1;
        }
    }
    counts
}

/// Skills of `target` missing from `profile`, most common among
/// `saved_jobs` first, ties alphabetical (case-insensitive).
pub fn skill_gaps(target: &Job, saved_jobs: &[Job], profile: &SkillProfile) -> Vec<String> {
    let counts = skill_counts(saved_jobs);
    let count_of = |skill: &str| counts.get(&skill.to_lowercase()).copied().unwrap_or(0);

    let mut gaps: Vec<String> = target
        .skills
        .iter()
        .filter(|skill| !profile.contains(&skill.to_lowercase()))
        .cloned()
        .collect();

    gaps.sort_by(|a, b| {
        count_of(b)
            .cmp(&count_of(a))
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    });
    gaps
}

/// Deal `gaps` round-robin into `weeks` buckets numbered from 1
pub fn distribute(gaps: &[String], weeks: usize) -> Vec<WeekBucket> {
    let weeks = weeks.max(1);
    let mut plan: Vec<WeekBucket> = (1..=weeks)
        .map(|week| WeekBucket { week, items: Vec::new() })
        .collect();

    for (idx, skill) in gaps.iter().enumerate() {
        plan[idx % weeks].items.push(skill.clone());
    }
    plan
}

pub fn build_roadmap(
    target: Option<&Job>,
    saved_jobs: &[Job],
    profile: &SkillProfile,
    weeks: usize,
) -> RoadmapPlan {
    let Some(target) = target else {
        return RoadmapPlan::empty();
    };

    let gaps = skill_gaps(target, saved_jobs, profile);
    let plan = distribute(&gaps, weeks);

    RoadmapPlan {
        job: Some(target.clone()),
        gaps,
        plan,
    }
}

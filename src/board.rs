//! Job board: the owned, deduplicated job collection and its load bookkeeping

use crate::error::{CompassError, Result};
use crate::input::csv_source::{parse_csv, read_csv_file, source_label_for_path, RawRow};
use crate::processing::filter::JobFilter;
use crate::processing::job::Job;
use crate::processing::lexicon::SkillMatcher;
use crate::processing::mapper::{is_likely_job, map_row_with};
use crate::processing::merge::merge;
use crate::processing::profile::SkillProfile;
use crate::processing::roadmap::{build_roadmap, RoadmapPlan};
use crate::processing::scoring::{score_match, MatchResult};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Accepted jobs of one source plus the rows that failed the acceptance gate
#[derive(Debug, Clone, Default)]
pub struct LoadBatch {
    pub source: String,
    pub jobs: Vec<Job>,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub path: String,
    pub reason: String,
}

/// Outcome of one load event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub rejected: usize,
    pub sources: Vec<String>,
    pub failed: Vec<SourceFailure>,
}

/// Map source rows to jobs, dropping rows that do not look like postings
pub fn map_rows(matcher: &SkillMatcher, rows: &[RawRow], source: &str) -> LoadBatch {
    let mut batch = LoadBatch {
        source: source.to_string(),
        ..Default::default()
    };

    for row in rows {
        let job = map_row_with(matcher, row, source);
        if is_likely_job(&job) {
            batch.jobs.push(job);
        } else {
            batch.rejected += 1;
        }
    }

    debug!("{}: {} accepted, {} rejected", source, batch.jobs.len(), batch.rejected);
    batch
}

pub struct JobBoard {
    jobs: Vec<Job>,
    sources: BTreeSet<String>,
    loaded: usize,
    rejected: usize,
    matcher: Arc<SkillMatcher>,
}

impl JobBoard {
    pub fn new(matcher: Arc<SkillMatcher>) -> Self {
        Self {
            jobs: Vec::new(),
            sources: BTreeSet::new(),
            loaded: 0,
            rejected: 0,
            matcher,
        }
    }

    pub fn with_default_lexicon() -> Result<Self> {
        Ok(Self::new(Arc::new(SkillMatcher::new()?)))
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Like `get`, but an unknown id is an error
    pub fn require(&self, id: &str) -> Result<&Job> {
        self.get(id)
            .ok_or_else(|| CompassError::JobNotFound(id.to_string()))
    }

    /// Every source label loaded so far, sorted
    pub fn sources(&self) -> Vec<String> {
        self.sources.iter().cloned().collect()
    }

    /// Cumulative accepted and rejected row counts
    pub fn totals(&self) -> (usize, usize) {
        (self.loaded, self.rejected)
    }

    /// Merge mapped batches into the collection, in the given order
    pub fn ingest(&mut self, batches: Vec<LoadBatch>) -> LoadReport {
        let mut report = LoadReport::default();

        for batch in batches {
            report.loaded += batch.jobs.len();
            report.rejected += batch.rejected;
            self.sources.insert(batch.source.clone());
            if !report.sources.contains(&batch.source) {
                report.sources.push(batch.source);
            }
            self.jobs = merge(&self.jobs, &batch.jobs);
        }

        self.loaded += report.loaded;
        self.rejected += report.rejected;
        report.sources.sort();
        report
    }

    /// Load CSV text that was obtained elsewhere
    pub fn load_csv_text(&mut self, text: &str, source: &str) -> Result<LoadReport> {
        let parsed = parse_csv(text)?;
        let mut batch = map_rows(&self.matcher, &parsed.rows, source);
        batch.rejected += parsed.unreadable;
        Ok(self.ingest(vec![batch]))
    }

    /// Read and map every file concurrently, then merge in input order.
    ///
    /// A file that cannot be read is recorded in the report and skipped.
    pub async fn load_csv_files(&mut self, paths: &[PathBuf]) -> Result<LoadReport> {
        let mut tasks = JoinSet::new();

        for (idx, path) in paths.iter().cloned().enumerate() {
            let matcher = Arc::clone(&self.matcher);
            tasks.spawn(async move {
                let source = source_label_for_path(&path);
                let outcome = read_csv_file(&path).await.map(|parsed| {
                    let mut batch = map_rows(&matcher, &parsed.rows, &source);
                    batch.rejected += parsed.unreadable;
                    batch
                });
                (idx, path, outcome)
            });
        }

        let mut finished = Vec::with_capacity(paths.len());
        while let Some(joined) = tasks.join_next().await {
            finished.push(joined?);
        }
        finished.sort_by_key(|(idx, _, _)| *idx);

        let mut batches = Vec::new();
        let mut failed = Vec::new();
        for (_, path, outcome) in finished {
            match outcome {
                Ok(batch) => batches.push(batch),
                Err(e) => {
                    warn!("Skipping source {}: {}", path.display(), e);
                    failed.push(SourceFailure {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let mut report = self.ingest(batches);
        report.failed = failed;
        info!(
            "Loaded {} jobs ({} rejected) from {} sources, {} failed",
            report.loaded,
            report.rejected,
            report.sources.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Drop every job from the given sources, returning the removed ids
    pub fn remove_sources(&mut self, labels: &[String]) -> HashSet<String> {
        let labels: HashSet<&str> = labels.iter().map(String::as_str).collect();
        let removed: HashSet<String> = self
            .jobs
            .iter()
            .filter(|job| labels.contains(job.source.as_str()))
            .map(|job| job.id.clone())
            .collect();

        self.jobs.retain(|job| !labels.contains(job.source.as_str()));
        self.sources.retain(|s| !labels.contains(s.as_str()));
        info!("Removed {} jobs from {} sources", removed.len(), labels.len());
        removed
    }

    pub fn reset(&mut self) {
        self.jobs.clear();
        self.sources.clear();
        self.loaded = 0;
        self.rejected = 0;
    }

    pub fn filtered(&self, filter: &JobFilter) -> Vec<&Job> {
        filter.apply(&self.jobs)
    }

    /// Jobs whose id is in `saved`, in collection order
    pub fn saved_jobs(&self, saved: &BTreeSet<String>) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|job| saved.contains(&job.id))
            .cloned()
            .collect()
    }

    /// The selected job when present, otherwise the first saved job
    pub fn roadmap_target(&self, selected: Option<&str>, saved: &BTreeSet<String>) -> Option<&Job> {
        selected
            .and_then(|id| self.get(id))
            .or_else(|| self.jobs.iter().find(|job| saved.contains(&job.id)))
    }

    pub fn roadmap(
        &self,
        selected: Option<&str>,
        saved: &BTreeSet<String>,
        profile: &SkillProfile,
        weeks: usize,
    ) -> RoadmapPlan {
        let saved_jobs = self.saved_jobs(saved);
        build_roadmap(self.roadmap_target(selected, saved), &saved_jobs, profile, weeks)
    }

    pub fn score(&self, job: &Job, profile: &SkillProfile) -> MatchResult {
        score_match(profile, &job.skills)
    }
}

//! Report views handed to the output formatters

use crate::board::{JobBoard, LoadReport};
use crate::input::manager::ResumeOutcome;
use crate::processing::filter::JobFilter;
use crate::processing::job::Job;
use crate::processing::profile::{parse_manual_skills, SkillProfile};
use crate::processing::roadmap::RoadmapPlan;
use crate::processing::scoring::{rank_by_match, score_match, MatchResult, ScoreClass};
use crate::store::tracker::{ApplicationRecord, ApplicationStatus};
use crate::store::user::UserData;
use serde::{Deserialize, Serialize};

/// One listed job with its match against the current profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub job: Job,
    pub result: MatchResult,
    pub class: ScoreClass,
    pub saved: bool,
    pub rejected: bool,
    pub status: Option<ApplicationStatus>,
}

impl JobRow {
    pub fn new(job: &Job, profile: &SkillProfile, user: &UserData) -> Self {
        let result = score_match(profile, &job.skills);
        Self {
            job: job.clone(),
            result,
            class: result.class(),
            saved: user.saved.contains(&job.id),
            rejected: user.rejected.contains(&job.id),
            status: user.applications.get(&job.id).map(|r| r.status),
        }
    }
}

/// How a job listing is selected and ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: usize,
    pub include_rejected: bool,
    /// Best match first, skipping saved and rejected jobs
    pub ranked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListReport {
    /// Jobs passing the filter before the limit
    pub matching: usize,
    /// Size of the whole collection
    pub total: usize,
    pub ranked: bool,
    pub jobs: Vec<JobRow>,
}

impl JobListReport {
    pub fn build(board: &JobBoard, filter: &JobFilter, user: &UserData, options: ListOptions) -> Self {
        let profile = user.profile();
        let filtered = board.filtered(filter);

        let matching: Vec<&Job> = if options.ranked {
            rank_by_match(filtered, &profile)
                .into_iter()
                .filter(|job| !user.saved.contains(&job.id) && !user.rejected.contains(&job.id))
                .collect()
        } else {
            filtered
                .into_iter()
                .filter(|job| options.include_rejected || !user.rejected.contains(&job.id))
                .collect()
        };

        Self {
            matching: matching.len(),
            total: board.len(),
            ranked: options.ranked,
            jobs: matching
                .into_iter()
                .take(options.limit)
                .map(|job| JobRow::new(job, &profile, user))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailReport {
    pub row: JobRow,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub selected: bool,
    pub record: Option<ApplicationRecord>,
}

impl JobDetailReport {
    pub fn build(job: &Job, user: &UserData) -> Self {
        let profile = user.profile();
        let (matched, missing): (Vec<String>, Vec<String>) = job
            .skills
            .iter()
            .cloned()
            .partition(|skill| profile.contains(&skill.to_lowercase()));

        Self {
            row: JobRow::new(job, &profile, user),
            matched,
            missing,
            selected: user.selected_job.as_deref() == Some(job.id.as_str()),
            record: user.applications.get(&job.id).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub manual_skills: Vec<String>,
    pub resume_file: String,
    pub resume_skills: Vec<String>,
    pub profile: Vec<String>,
}

impl ProfileReport {
    pub fn build(user: &UserData) -> Self {
        Self {
            manual_skills: parse_manual_skills(&user.manual_skills),
            resume_file: user.resume_file.clone(),
            resume_skills: user.resume_skills.clone(),
            profile: user.profile().into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerEntry {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub record: ApplicationRecord,
}

/// Tracked applications for jobs in the collection, most recently updated first.
/// Records whose job is not loaded are skipped.
pub fn tracker_entries(board: &JobBoard, user: &UserData) -> Vec<TrackerEntry> {
    let mut entries: Vec<TrackerEntry> = user
        .applications
        .iter()
        .filter_map(|(id, record)| {
            board.get(id).map(|job| TrackerEntry {
                job_id: id.clone(),
                title: job.title.clone(),
                company: job.company.clone(),
                record: record.clone(),
            })
        })
        .collect();

    // None sorts below any timestamp
    entries.sort_by(|a, b| b.record.updated_at.cmp(&a.record.updated_at));
    entries
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcesReport {
    pub sources: Vec<String>,
    pub extra_sources: Vec<String>,
    pub jobs: usize,
}

/// Everything a command can print
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Report {
    Load(LoadReport),
    Jobs(JobListReport),
    Job(Box<JobDetailReport>),
    Profile(ProfileReport),
    Resume(ResumeOutcome),
    Roadmap(RoadmapPlan),
    Tracker(Vec<TrackerEntry>),
    Sources(SourcesReport),
    Message(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const CSV: &str = "title,company,location,description\n\
        Data Engineer,Acme,Singapore,Python SQL Docker\n\
        Frontend Developer,Globex,Remote,React and TypeScript\n";

    fn board() -> JobBoard {
        let mut board = JobBoard::with_default_lexicon().unwrap();
        board.load_csv_text(CSV, "indeed").unwrap();
        board
    }

    fn options(limit: usize) -> ListOptions {
        ListOptions {
            limit,
            include_rejected: false,
            ranked: false,
        }
    }

    #[test]
    fn test_job_list_hides_rejected() {
        let board = board();
        let mut user = UserData::default();
        user.rejected.insert(board.jobs()[1].id.clone());

        let report = JobListReport::build(&board, &JobFilter::default(), &user, options(10));
        assert_eq!(report.matching, 1);
        assert_eq!(report.total, 2);

        let all = JobListReport::build(
            &board,
            &JobFilter::default(),
            &user,
            ListOptions {
                include_rejected: true,
                ..options(10)
            },
        );
        assert_eq!(all.matching, 2);
        assert!(all.jobs[1].rejected);
    }

    #[test]
    fn test_job_list_limit() {
        let board = board();
        let report = JobListReport::build(&board, &JobFilter::default(), &UserData::default(), options(1));
        assert_eq!(report.matching, 2);
        assert_eq!(report.jobs.len(), 1);
    }

    #[test]
    fn test_job_detail_splits_skills() {
        let board = board();
        let mut user = UserData::default();
        user.manual_skills = "python, docker".to_string();
        let job = &board.jobs()[0];
        user.applications.set_status(&job.id, ApplicationStatus::Applied, Utc::now());

        let detail = JobDetailReport::build(job, &user);
        assert_eq!(detail.matched, vec!["python", "docker"]);
        assert_eq!(detail.missing, vec!["sql"]);
        assert_eq!(detail.row.result.score, 67);
        assert_eq!(detail.row.class, ScoreClass::Warn);
        assert_eq!(detail.row.status, Some(ApplicationStatus::Applied));
    }

    #[test]
    fn test_ranked_list_orders_by_match_and_skips_decided_jobs() {
        let mut board = board();
        board
            .load_csv_text(
                "title,company,location,description\n\
                 ML Engineer,Initech,Berlin,Python and PyTorch\n\
                 Analyst,Umbrella,Remote,Excel\n",
                "glassdoor",
            )
            .unwrap();

        let mut user = UserData::default();
        user.manual_skills = "python, react, typescript".to_string();
        let analyst = board.jobs().iter().find(|j| j.title == "Analyst").unwrap().id.clone();
        user.rejected.insert(analyst);

        let ranked = ListOptions {
            ranked: true,
            ..options(10)
        };
        let report = JobListReport::build(&board, &JobFilter::default(), &user, ranked);
        let titles: Vec<&str> = report.jobs.iter().map(|r| r.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Frontend Developer", "ML Engineer", "Data Engineer"]);
        assert!(report.ranked);

        let frontend = board.jobs()[1].id.clone();
        user.saved.insert(frontend);
        let report = JobListReport::build(&board, &JobFilter::default(), &user, ranked);
        assert_eq!(report.matching, 2);
        assert_eq!(report.jobs[0].job.title, "ML Engineer");
    }

    #[test]
    fn test_tracker_entries_newest_first_and_loaded_only() {
        let board = board();
        let engineer = board.jobs()[0].id.clone();
        let frontend = board.jobs()[1].id.clone();
        let earlier = Utc::now() - chrono::Duration::hours(2);
        let later = Utc::now();

        let mut user = UserData::default();
        user.applications.set_notes(&engineer, "sent", earlier);
        user.applications.set_status(&frontend, ApplicationStatus::Interview, later);
        user.applications.set_notes("gone", "follow up", later);

        let entries = tracker_entries(&board, &user);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_id, frontend);
        assert_eq!(entries[0].title, "Frontend Developer");
        assert_eq!(entries[1].job_id, engineer);
        assert_eq!(entries[1].record.notes, "sent");
    }
}

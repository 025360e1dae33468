//! Integration tests for job compass

use job_compass::board::JobBoard;
use job_compass::config::Config;
use job_compass::input::manager::{InputManager, RESUME_READ_FAILED};
use job_compass::processing::filter::JobFilter;
use job_compass::processing::keywords::KeywordExtractor;
use job_compass::processing::lexicon::SkillMatcher;
use job_compass::processing::profile::combine_skills;
use job_compass::store::json_store::JsonStore;
use job_compass::store::tracker::ApplicationStatus;
use job_compass::store::user::UserData;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

fn keywords() -> KeywordExtractor {
    KeywordExtractor::new(3, 24)
}

#[tokio::test]
async fn test_load_fixtures_dedups_across_sources() {
    let mut board = JobBoard::with_default_lexicon().unwrap();
    let report = board
        .load_csv_files(&[fixture("indeed.csv"), fixture("glassdoor.csv")])
        .await
        .unwrap();

    assert_eq!(report.loaded, 4);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.sources, vec!["glassdoor", "indeed"]);
    assert!(report.failed.is_empty());

    // The Acme posting appears in both files and is kept once, from the first
    assert_eq!(board.len(), 3);
    let acme: Vec<_> = board.jobs().iter().filter(|j| j.company == "Acme").collect();
    assert_eq!(acme.len(), 1);
    assert_eq!(acme[0].source, "indeed");
    assert_eq!(acme[0].salary_number, Some(5000.0));
}

#[tokio::test]
async fn test_missing_source_is_reported_not_fatal() {
    let mut board = JobBoard::with_default_lexicon().unwrap();
    let report = board
        .load_csv_files(&[fixture("missing.csv"), fixture("indeed.csv")])
        .await
        .unwrap();

    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].path.ends_with("missing.csv"));
    assert_eq!(report.sources, vec!["indeed"]);
    assert_eq!(board.len(), 2);
}

#[tokio::test]
async fn test_bundled_datasets_load() {
    let config = Config::default();
    let mut board = JobBoard::with_default_lexicon().unwrap();
    let report = board.load_csv_files(&config.dataset_paths()).await.unwrap();

    assert!(report.failed.is_empty());
    assert_eq!(report.sources.len(), 5);
    // jobstreet repeats a mycareersfuture posting
    assert_eq!(board.len(), report.loaded - 1);
    assert!(board.jobs().iter().all(|j| !j.id.is_empty()));
}

#[tokio::test]
async fn test_resume_from_text_file() {
    let matcher = SkillMatcher::new().unwrap();
    let manager = InputManager::new();
    let outcome = manager
        .read_resume(&fixture("sample_resume.txt"), &matcher, &keywords(), 20)
        .await;

    assert!(outcome.succeeded);
    assert_eq!(outcome.file_name, "sample_resume.txt");
    assert_eq!(
        outcome.status,
        format!("Extracted {} keywords from sample_resume.txt", outcome.skills.len())
    );
    for skill in ["python", "sql", "docker", "react", "REST API", "Git", "Agile/Scrum"] {
        assert!(outcome.skills.iter().any(|s| s == skill), "missing {}", skill);
    }
}

#[tokio::test]
async fn test_unreadable_resume_reports_failure() {
    let matcher = SkillMatcher::new().unwrap();
    let manager = InputManager::new();

    // missing_font_resume.pdf references a font without any /Resources,
    // which makes the PDF parser panic
    for name in [
        "broken_resume.pdf",
        "missing_font_resume.pdf",
        "broken_resume.docx",
        "nonexistent.txt",
    ] {
        let outcome = manager
            .read_resume(&fixture(name), &matcher, &keywords(), 20)
            .await;
        assert!(!outcome.succeeded);
        assert!(outcome.skills.is_empty());
        assert_eq!(outcome.status, RESUME_READ_FAILED);
    }
}

#[tokio::test]
async fn test_extract_text_from_plain_resume() {
    let manager = InputManager::new();
    let text = manager.extract_text(&fixture("sample_resume.txt")).await.unwrap();
    assert!(text.contains("Python"));
    assert!(manager.extract_text(&fixture("missing_font_resume.pdf")).await.is_err());
}

#[tokio::test]
async fn test_profile_scoring_and_roadmap() {
    let mut board = JobBoard::with_default_lexicon().unwrap();
    board
        .load_csv_files(&[fixture("indeed.csv"), fixture("glassdoor.csv")])
        .await
        .unwrap();

    let profile = combine_skills("python, docker", &[]);

    let analyst = board.jobs().iter().find(|j| j.title == "Data Analyst").unwrap();
    let result = board.score(analyst, &profile);
    assert_eq!((result.overlap, result.total), (1, 3));
    assert_eq!(result.score, 33);

    let platform = board.jobs().iter().find(|j| j.title == "Platform Engineer").unwrap();
    let ml = board.jobs().iter().find(|j| j.title == "ML Engineer").unwrap();
    let saved = [platform.id.clone(), ml.id.clone()].into_iter().collect();

    let plan = board.roadmap(Some(&platform.id), &saved, &profile, 2);
    assert_eq!(plan.job.as_ref().map(|j| j.id.as_str()), Some(platform.id.as_str()));
    assert!(!plan.gaps.contains(&"docker".to_string()));
    assert_eq!(plan.plan.len(), 2);
    let planned: usize = plan.plan.iter().map(|w| w.items.len()).sum();
    assert_eq!(planned, plan.gaps.len());
}

#[tokio::test]
async fn test_filters_on_loaded_jobs() {
    let mut board = JobBoard::with_default_lexicon().unwrap();
    board
        .load_csv_files(&[fixture("indeed.csv"), fixture("glassdoor.csv")])
        .await
        .unwrap();

    let filter = JobFilter {
        tech: Some("python".to_string()),
        ..Default::default()
    };
    assert_eq!(board.filtered(&filter).len(), 2);

    let filter = JobFilter {
        source: Some("glassdoor".to_string()),
        ..Default::default()
    };
    let jobs = board.filtered(&filter);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "ML Engineer");
}

#[tokio::test]
async fn test_clearing_extra_sources_prunes_user_data() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::open(dir.path().join("state.json")).unwrap();

    let mut board = JobBoard::with_default_lexicon().unwrap();
    board.load_csv_files(&[fixture("indeed.csv")]).await.unwrap();
    board.load_csv_files(&[fixture("glassdoor.csv")]).await.unwrap();

    let ml_id = board
        .jobs()
        .iter()
        .find(|j| j.source == "glassdoor")
        .map(|j| j.id.clone())
        .unwrap();
    let analyst_id = board.jobs()[0].id.clone();

    let mut user = UserData::default();
    user.extra_sources.push(fixture("glassdoor.csv").display().to_string());
    user.saved.insert(ml_id.clone());
    user.saved.insert(analyst_id.clone());
    user.applications
        .set_status(&ml_id, ApplicationStatus::Interview, chrono::Utc::now());

    let removed = board.remove_sources(&["glassdoor".to_string()]);
    user.forget_jobs(&removed);
    user.extra_sources.clear();
    user.persist(&mut store).unwrap();

    let reloaded = UserData::load(&JsonStore::open(store.path()).unwrap());
    assert!(!reloaded.saved.contains(&ml_id));
    assert!(reloaded.saved.contains(&analyst_id));
    assert!(reloaded.applications.is_empty());
    assert!(reloaded.extra_sources.is_empty());
}

#[tokio::test]
async fn test_reset_clears_job_state_and_keeps_manual_skills() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::open(dir.path().join("state.json")).unwrap();

    let mut board = JobBoard::with_default_lexicon().unwrap();
    board.load_csv_files(&[fixture("indeed.csv")]).await.unwrap();
    let id = board.jobs()[0].id.clone();

    let mut user = UserData::default();
    user.manual_skills = "python, docker".to_string();
    user.resume_skills = vec!["sql".to_string()];
    user.resume_file = "cv.txt".to_string();
    user.saved.insert(id.clone());
    user.rejected.insert("other".to_string());
    user.selected_job = Some(id.clone());
    user.extra_sources.push(fixture("glassdoor.csv").display().to_string());
    user.applications
        .set_status(&id, ApplicationStatus::Applied, chrono::Utc::now());
    user.persist(&mut store).unwrap();

    user.reset(&mut store).unwrap();
    assert_eq!(user.manual_skills, "python, docker");

    let reloaded = UserData::load(&JsonStore::open(store.path()).unwrap());
    assert_eq!(reloaded.manual_skills, "python, docker");
    assert!(reloaded.resume_skills.is_empty());
    assert!(reloaded.resume_file.is_empty());
    assert!(reloaded.saved.is_empty());
    assert!(reloaded.rejected.is_empty());
    assert!(reloaded.selected_job.is_none());
    assert!(reloaded.extra_sources.is_empty());
    assert!(reloaded.applications.is_empty());
}

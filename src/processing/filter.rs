//! Job collection filtering

use crate::processing::job::Job;
use crate::processing::mapper::parse_salary;

pub const ALL_SOURCES: &str = "all";

/// Search criteria; blank fields do not constrain
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<String>,
    pub tech: Option<String>,
    pub source: Option<String>,
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(source) = self.source.as_deref().filter(|s| *s != ALL_SOURCES) {
            if job.source != source {
                return false;
            }
        }

        if let Some(query) = normalized(&self.query) {
            let hay = format!("{} {} {}", job.title, job.company, job.description).to_lowercase();
            if !hay.contains(&query) {
                return false;
            }
        }

        if let Some(location) = normalized(&self.location) {
            if !job.location.to_lowercase().contains(&location) {
                return false;
            }
        }

        if let Some(min) = self.min_salary.as_deref().and_then(parse_salary) {
            match job.salary_number {
                Some(salary) if salary >= min => {}
                _ => return false,
            }
        }

        if let Some(tech) = normalized(&self.tech) {
            let hay = format!("{} {} {}", job.title, job.description, job.skills_joined()).to_lowercase();
            if !hay.contains(&tech) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, location: &str, salary: Option<f64>, source: &str, skills: &[&str]) -> Job {
        Job {
            id: title.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            salary_text: String::new(),
            salary_number: salary,
            url: String::new(),
            description: "Build things".to_string(),
            posted: String::new(),
            source: source.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let jobs = vec![job("Dev", "", None, "indeed", &[])];
        assert_eq!(JobFilter::default().apply(&jobs).len(), 1);
    }

    #[test]
    fn test_query_location_source() {
        let jobs = vec![
            job("Data Analyst", "Singapore", None, "jobstreet", &[]),
            job("Backend Dev", "Remote", None, "indeed", &[]),
        ];

        let filter = JobFilter { query: Some("ANALYST".into()), ..Default::default() };
        assert_eq!(filter.apply(&jobs)[0].title, "Data Analyst");

        let filter = JobFilter { location: Some(" remote ".into()), ..Default::default() };
        assert_eq!(filter.apply(&jobs)[0].title, "Backend Dev");

        let filter = JobFilter { source: Some("jobstreet".into()), ..Default::default() };
        assert_eq!(filter.apply(&jobs).len(), 1);

        let filter = JobFilter { source: Some(ALL_SOURCES.into()), ..Default::default() };
        assert_eq!(filter.apply(&jobs).len(), 2);
    }

    #[test]
    fn test_min_salary_excludes_unknown() {
        let jobs = vec![
            job("A", "", Some(5000.0), "s", &[]),
            job("B", "", Some(3000.0), "s", &[]),
            job("C", "", None, "s", &[]),
        ];
        let filter = JobFilter { min_salary: Some("4,000".into()), ..Default::default() };
        let titles: Vec<&str> = filter.apply(&jobs).into_iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["A"]);

        let filter = JobFilter { min_salary: Some("any".into()), ..Default::default() };
        assert_eq!(filter.apply(&jobs).len(), 3);
    }

    #[test]
    fn test_tech_searches_skills() {
        let jobs = vec![job("Engineer", "", None, "s", &["kubernetes"]), job("Writer", "", None, "s", &[])];
        let filter = JobFilter { tech: Some("Kubernetes".into()), ..Default::default() };
        assert_eq!(filter.apply(&jobs).len(), 1);
    }
}

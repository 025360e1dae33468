//! Raw source row to canonical job mapping

use crate::input::csv_source::RawRow;
use crate::processing::header::{Field, NormalizedRow};
use crate::processing::identity::job_identity;
use crate::processing::job::Job;
use crate::processing::lexicon::{default_matcher, SkillMatcher};
use regex::Regex;
use std::sync::OnceLock;

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("Invalid number regex"))
}

/// First decimal number in `text` with thousands separators removed
pub fn parse_salary(text: &str) -> Option<f64> {
    let stripped = text.replace(',', "");
    number_regex()
        .find(&stripped)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Build a job from one row using the built-in skill lexicon
pub fn map_row_to_job(row: &RawRow, source_label: &str) -> Job {
    map_row_with(default_matcher(), row, source_label)
}

/// Build a job from one row. Missing columns degrade to empty strings.
pub fn map_row_with(matcher: &SkillMatcher, row: &RawRow, source_label: &str) -> Job {
    let normalized = NormalizedRow::from_raw(row);

    let title = normalized.pick(Field::Title);
    let company = normalized.pick(Field::Company);
    let location = normalized.pick(Field::Location);
    let salary = normalized.pick(Field::Salary);
    let url = normalized.pick(Field::Url);
    let description = normalized.pick(Field::Description);
    let posted = normalized.pick(Field::Posted);

    let skills = matcher.extract(&format!("{} {}", title, description));

    Job {
        id: job_identity(title, company, location, url),
        title: title.trim().to_string(),
        company: company.trim().to_string(),
        location: location.trim().to_string(),
        salary_text: salary.trim().to_string(),
        salary_number: parse_salary(salary),
        url: url.trim().to_string(),
        description: description.trim().to_string(),
        posted: posted.trim().to_string(),
        source: source_label.to_string(),
        skills,
    }
}

/// Acceptance gate for mapped rows: a usable title plus a company or a link
pub fn is_likely_job(job: &Job) -> bool {
    job.title.chars().count() >= 2
        && (job.company.chars().count() >= 2 || !job.url.is_empty())
}

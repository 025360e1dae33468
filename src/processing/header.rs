//! Column header normalization and alias resolution
//!
//! Sources name their columns however they like ("Job Title", "job_title",
//! "Position"...). Headers are folded into one vocabulary and each canonical
//! field is resolved through an ordered alias list.

use crate::input::csv_source::RawRow;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical job fields that are read from a source row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Company,
    Location,
    Salary,
    Url,
    Description,
    Posted,
}

/// Accepted header aliases per field, highest priority first
pub const FIELD_ALIASES: &[(Field, &[&str])] = &[
    (
        Field::Title,
        &["title", "job title", "job_title", "jobtitle", "position", "role", "designation"],
    ),
    (
        Field::Company,
        &["company", "company name", "employer", "organisation", "organization"],
    ),
    (
        Field::Location,
        &["location", "job location", "city", "town", "region", "country"],
    ),
    (
        Field::Salary,
        &[
            "salary",
            "salary range",
            "pay",
            "compensation",
            "wage",
            "monthly salary",
            "annual salary",
        ],
    ),
    (
        Field::Url,
        &["url", "link", "job url", "job link", "apply link"],
    ),
    (
        Field::Description,
        &[
            "description",
            "job description",
            "job_description",
            "job_details",
            "summary",
            "responsibilities",
            "requirements",
            "roles & responsibilities",
            "roles and responsibilities",
        ],
    ),
    (
        Field::Posted,
        &["posted", "posted date", "date", "created", "created at"],
    ),
];

impl Field {
    pub fn aliases(self) -> &'static [&'static str] {
        FIELD_ALIASES
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

/// Lowercase, trim and collapse internal whitespace runs to a single space
pub fn normalize_header(raw: &str) -> String {
    whitespace_regex()
        .replace_all(raw.trim(), " ")
        .to_lowercase()
}

/// A source row re-keyed by normalized header
#[derive(Debug, Clone, Default)]
pub struct NormalizedRow {
    values: HashMap<String, String>,
}

impl NormalizedRow {
    /// Normalize every header of `row`. When two columns fold into the same
    /// header, the one appearing later in the row overwrites the earlier.
    pub fn from_raw(row: &RawRow) -> Self {
        let mut values = HashMap::with_capacity(row.len());
        for (key, value) in row.iter() {
            values.insert(normalize_header(key), value.to_string());
        }
        Self { values }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.values.get(header).map(String::as_str)
    }

    /// First alias whose value is non-blank after trimming, or `""`
    pub fn pick(&self, field: Field) -> &str {
        self.pick_from(field.aliases())
    }

    pub fn pick_from(&self, aliases: &[&str]) -> &str {
        aliases
            .iter()
            .filter_map(|alias| self.values.get(*alias))
            .find(|value| !value.trim().is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }
}

//! Skill lexicon matching over free text

use crate::error::{CompassError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Recognized skills, in output order. Entries are displayed as written here.
pub const SKILL_LEXICON: &[&str] = &[
    "python", "java", "javascript", "typescript", "c", "c++", "c#", "go", "golang", "rust",
    "kotlin", "swift", "php", "ruby", "scala",
    "react", "next.js", "node", "node.js", "express", "vue", "angular", "svelte", "html", "css",
    "tailwind",
    "sql", "postgres", "postgresql", "mysql", "mongodb", "redis", "spark", "hadoop", "pandas",
    "numpy",
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ci/cd", "github actions",
    "linux",
    "machine learning", "deep learning", "pytorch", "tensorflow", "nlp", "computer vision",
    "excel", "powerbi", "tableau", "data analysis", "stakeholder", "communication",
    "presentation",
    "oauth", "jwt", "iam", "owasp",
];

pub const REST_API: &str = "REST API";
pub const GIT: &str = "Git";
pub const AGILE_SCRUM: &str = "Agile/Scrum";

/// Skill extractor combining the lexicon with a few composite rules
pub struct SkillMatcher {
    lexicon: Vec<String>,
    automaton: AhoCorasick,
    rest_regex: Regex,
    git_regex: Regex,
    agile_regex: Regex,
}

impl SkillMatcher {
    /// Matcher over the built-in lexicon
    pub fn new() -> Result<Self> {
        Self::with_lexicon(SKILL_LEXICON.iter().map(|s| s.to_string()).collect())
    }

    /// Built-in lexicon followed by `additional` entries
    pub fn with_additional(additional: &[String]) -> Result<Self> {
        let mut lexicon: Vec<String> = SKILL_LEXICON.iter().map(|s| s.to_string()).collect();
        for extra in additional {
            let extra = extra.trim();
            if !extra.is_empty() && !lexicon.iter().any(|s| s.eq_ignore_ascii_case(extra)) {
                lexicon.push(extra.to_string());
            }
        }
        Self::with_lexicon(lexicon)
    }

    pub fn with_lexicon(lexicon: Vec<String>) -> Result<Self> {
        let lexicon: Vec<String> = lexicon.into_iter().filter(|s| !s.is_empty()).collect();
        let patterns: Vec<String> = lexicon.iter().map(|s| s.to_lowercase()).collect();

        // Standard semantics so overlapping entries ("node", "node.js") all report
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| CompassError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        debug!("Built skill matcher with {} lexicon entries", lexicon.len());

        Ok(Self {
            lexicon,
            automaton,
            rest_regex: Regex::new(r"(?i)rest\s*api|restful").expect("Invalid REST regex"),
            git_regex: Regex::new(r"(?i)\bgit\b").expect("Invalid git regex"),
            agile_regex: Regex::new(r"(?i)agile\b|scrum\b").expect("Invalid agile regex"),
        })
    }

    /// Distinct skills found in `text`, lexicon order first, then composite rules
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let bytes = lowered.as_bytes();
        let mut hit = vec![false; self.lexicon.len()];

        for mat in self.automaton.find_overlapping_iter(&lowered) {
            let id = mat.pattern().as_usize();
            if hit[id] {
                continue;
            }
            let before_ok = mat.start() == 0 || !is_word_byte(bytes[mat.start() - 1]);
            let after_ok = mat.end() == bytes.len() || !is_word_byte(bytes[mat.end()]);
            if before_ok && after_ok {
                hit[id] = true;
            }
        }

        let mut found: Vec<String> = Vec::new();
        for (skill, _) in self.lexicon.iter().zip(hit).filter(|(_, h)| *h) {
            push_unique(&mut found, skill);
        }

        if self.rest_regex.is_match(&lowered) {
            push_unique(&mut found, REST_API);
        }
        if self.git_regex.is_match(&lowered) {
            push_unique(&mut found, GIT);
        }
        if self.agile_regex.is_match(&lowered) {
            push_unique(&mut found, AGILE_SCRUM);
        }

        found
    }

    pub fn skill_count(&self) -> usize {
        self.lexicon.len()
    }
}

/// Skill boundaries are anything outside ASCII `[a-z0-9]`
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

fn push_unique(found: &mut Vec<String>, skill: &str) {
    if !found.iter().any(|s| s == skill) {
        found.push(skill.to_string());
    }
}

/// Shared matcher over the built-in lexicon
pub fn default_matcher() -> &'static SkillMatcher {
    static MATCHER: OnceLock<SkillMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| SkillMatcher::new().expect("Built-in skill lexicon must compile"))
}

/// Extract skills with the built-in lexicon
pub fn extract_skills(text: &str) -> Vec<String> {
    default_matcher().extract(text)
}

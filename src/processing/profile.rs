//! Candidate skill profile assembly

use crate::processing::keywords::KeywordExtractor;
use crate::processing::lexicon::SkillMatcher;
use std::collections::BTreeSet;

/// Lowercased candidate skills. Ordered so equal inputs iterate identically.
pub type SkillProfile = BTreeSet<String>;

/// Split manually entered skills on commas and newlines
pub fn parse_manual_skills(manual: &str) -> Vec<String> {
    manual
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Union of manual and resume-derived skills, lowercased
pub fn combine_skills(manual: &str, resume_skills: &[String]) -> SkillProfile {
    parse_manual_skills(manual)
        .into_iter()
        .chain(resume_skills.iter().map(|s| s.to_lowercase()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Skills recognized in resume text: lexicon hits first, then frequent keywords
pub fn resume_skills(
    matcher: &SkillMatcher,
    keywords: &KeywordExtractor,
    text: &str,
    keyword_limit: usize,
) -> Vec<String> {
    let mut skills = matcher.extract(text);
    for keyword in keywords.top_keywords(text, keyword_limit) {
        if !skills.contains(&keyword) {
            skills.push(keyword);
        }
    }
    skills
}

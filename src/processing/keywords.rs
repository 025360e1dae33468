//! Frequency-based keyword extraction for resume text

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

pub const DEFAULT_KEYWORD_LIMIT: usize = 20;
pub const MIN_KEYWORD_LEN: usize = 3;
pub const MAX_KEYWORD_LEN: usize = 24;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "have", "has", "are", "was", "were",
    "will", "your", "you", "our", "their",
    "experience", "skills", "skill", "project", "projects", "work", "working", "team", "teams",
    "role", "roles", "using", "used", "use",
    "develop", "development", "design", "analysis", "data", "manage", "management", "support",
    "responsible", "responsibilities",
    "intern", "internship", "graduate", "graduates", "university", "college", "singapore",
];

fn non_token_regex() -> &'static Regex {
    static NON_TOKEN: OnceLock<Regex> = OnceLock::new();
    NON_TOKEN.get_or_init(|| Regex::new(r"[^a-z0-9+.#\s]").expect("Invalid token regex"))
}

/// Keyword extractor with configurable length bounds
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    min_len: usize,
    max_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(MIN_KEYWORD_LEN, MAX_KEYWORD_LEN)
    }
}

impl KeywordExtractor {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            min_len,
            max_len: max_len.max(min_len),
        }
    }

    /// Lowercased tokens of `text` that survive the length and stop-word filters
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        non_token_regex()
            .replace_all(&lowered, " ")
            .split_whitespace()
            .filter(|w| {
                let len = w.chars().count();
                len >= self.min_len && len <= self.max_len
            })
            .filter(|w| !self.stop_words.contains(w))
            .map(str::to_string)
            .collect()
    }

    /// Most frequent tokens, ties kept in first-seen order
    pub fn top_keywords(&self, text: &str, limit: usize) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for token in self.tokenize(text) {
            let count = counts.entry(token.clone()).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        // sort_by is stable, so equal counts keep first-seen order
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order.truncate(limit);
        order
    }
}

/// Top keywords with the default bounds
pub fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    KeywordExtractor::default().top_keywords(text, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_frequency_order() {
        let text = "Kafka pipelines. Kafka streaming with Flink; flink and Kafka.";
        let keywords = top_keywords(text, 5);
        assert_eq!(keywords[0], "kafka");
        assert_eq!(keywords[1], "flink");
    }

    #[test]
    fn test_stop_words_and_length_filters() {
        let text = "the team and our experience in a ux supercalifragilisticexpialidocious role";
        let keywords = top_keywords(text, 10);
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_symbol_tokens_survive() {
        let tokens = KeywordExtractor::default().tokenize("C# / C++ & node.js (ASP.NET)");
        assert!(tokens.contains(&"c++".to_string()));
        assert!(tokens.contains(&"node.js".to_string()));
        assert!(tokens.contains(&"asp.net".to_string()));
    }

    #[test]
    fn test_limit() {
        let text = "alpha beta gamma delta epsilon zeta";
        assert_eq!(top_keywords(text, 3), vec!["alpha", "beta", "gamma"]);
        assert!(top_keywords(text, 0).is_empty());
    }
}

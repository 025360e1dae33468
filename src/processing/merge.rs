//! Deduplicating merge of job batches

use crate::processing::job::Job;
use std::collections::HashSet;

/// Concatenate `existing` and `incoming`, keeping the first job per id.
///
/// Existing jobs win on collision and first-appearance order is kept, which
/// makes repeated or reordered merges converge on the same id set.
pub fn merge(existing: &[Job], incoming: &[Job]) -> Vec<Job> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + incoming.len());
    existing
        .iter()
        .chain(incoming.iter())
        .filter(|job| seen.insert(job.id.as_str()))
        .cloned()
        .collect()
}

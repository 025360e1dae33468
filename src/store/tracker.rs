//! Application tracking records, kept apart from the immutable jobs

use crate::error::CompassError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Saved,
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Saved,
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Saved => "Saved",
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                CompassError::InvalidInput(format!(
                    "Invalid status: {}. Supported: Saved, Applied, Interview, Offer, Rejected",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub status: ApplicationStatus,
    pub notes: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Application records keyed by job id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tracker {
    records: BTreeMap<String, ApplicationRecord>,
}

impl Tracker {
    pub fn get(&self, job_id: &str) -> Option<&ApplicationRecord> {
        self.records.get(job_id)
    }

    pub fn set_status(&mut self, job_id: &str, status: ApplicationStatus, now: DateTime<Utc>) {
        let record = self.records.entry(job_id.to_string()).or_default();
        record.status = status;
        record.updated_at = Some(now);
    }

    pub fn set_notes(&mut self, job_id: &str, notes: &str, now: DateTime<Utc>) {
        let record = self.records.entry(job_id.to_string()).or_default();
        record.notes = notes.to_string();
        record.updated_at = Some(now);
    }

    /// Drop records for the given ids, returning how many were removed
    pub fn forget(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.records.len();
        self.records.retain(|id, _| !ids.contains(id));
        before - self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ApplicationRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

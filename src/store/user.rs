//! Candidate state: skills, resume, saved/rejected jobs and tracker

use crate::error::Result;
use crate::processing::profile::{combine_skills, SkillProfile};
use crate::store::json_store::JsonStore;
use crate::store::keys::StoreKey;
use crate::store::tracker::Tracker;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserData {
    pub manual_skills: String,
    pub resume_skills: Vec<String>,
    pub resume_file: String,
    pub applications: Tracker,
    pub saved: BTreeSet<String>,
    pub rejected: BTreeSet<String>,
    pub extra_sources: Vec<String>,
    pub selected_job: Option<String>,
}

impl UserData {
    pub fn load(store: &JsonStore) -> Self {
        Self {
            manual_skills: store.read(StoreKey::UserSkills, String::new()),
            resume_skills: store.read(StoreKey::CvSkills, Vec::new()),
            resume_file: store.read(StoreKey::CvFileName, String::new()),
            applications: store.read(StoreKey::Applications, Tracker::default()),
            saved: store.read(StoreKey::Saved, BTreeSet::new()),
            rejected: store.read(StoreKey::Rejected, BTreeSet::new()),
            extra_sources: store.read(StoreKey::ExtraSources, Vec::new()),
            selected_job: store.read(StoreKey::SelectedJob, None),
        }
    }

    /// Write every field in one flush; nothing is written if a value fails to serialize
    pub fn persist(&self, store: &mut JsonStore) -> Result<()> {
        store.write_many(vec![
            (StoreKey::UserSkills, serde_json::to_value(&self.manual_skills)?),
            (StoreKey::CvSkills, serde_json::to_value(&self.resume_skills)?),
            (StoreKey::CvFileName, serde_json::to_value(&self.resume_file)?),
            (StoreKey::Applications, serde_json::to_value(&self.applications)?),
            (StoreKey::Saved, serde_json::to_value(&self.saved)?),
            (StoreKey::Rejected, serde_json::to_value(&self.rejected)?),
            (StoreKey::ExtraSources, serde_json::to_value(&self.extra_sources)?),
            (StoreKey::SelectedJob, serde_json::to_value(&self.selected_job)?),
        ])
    }

    /// Forget resume, saved, rejected, tracker, selection and extra sources.
    /// Manual skills are kept.
    pub fn reset(&mut self, store: &mut JsonStore) -> Result<()> {
        store.remove_keys(&StoreKey::RESETTABLE)?;
        *self = Self::load(store);
        Ok(())
    }

    /// Candidate skill profile from manual and resume skills
    pub fn profile(&self) -> SkillProfile {
        combine_skills(&self.manual_skills, &self.resume_skills)
    }

    /// Toggle saved state, returning whether the job is now saved
    pub fn toggle_saved(&mut self, job_id: &str) -> bool {
        if self.saved.remove(job_id) {
            false
        } else {
            self.saved.insert(job_id.to_string());
            true
        }
    }

    pub fn clear_resume(&mut self) {
        self.resume_skills.clear();
        self.resume_file.clear();
    }

    /// Remove every reference to the given job ids
    pub fn forget_jobs(&mut self, ids: &HashSet<String>) {
        self.saved.retain(|id| !ids.contains(id));
        self.rejected.retain(|id| !ids.contains(id));
        self.applications.forget(ids);
        if self.selected_job.as_ref().is_some_and(|id| ids.contains(id)) {
            self.selected_job = None;
        }
    }
}

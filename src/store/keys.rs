//! Persisted state keys

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    UserSkills,
    CvSkills,
    CvFileName,
    Applications,
    Saved,
    Rejected,
    ExtraSources,
    SelectedJob,
}

impl StoreKey {
    /// Keys wiped by a reset; manual skills survive
    pub const RESETTABLE: [StoreKey; 7] = [
        StoreKey::CvSkills,
        StoreKey::CvFileName,
        StoreKey::Applications,
        StoreKey::Saved,
        StoreKey::Rejected,
        StoreKey::ExtraSources,
        StoreKey::SelectedJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::UserSkills => "careercompass.userSkills",
            StoreKey::CvSkills => "careercompass.cvSkills",
            StoreKey::CvFileName => "careercompass.cvFileName",
            StoreKey::Applications => "careercompass.applications",
            StoreKey::Saved => "careercompass.saved",
            StoreKey::Rejected => "careercompass.rejected",
            StoreKey::ExtraSources => "careercompass.extraSources",
            StoreKey::SelectedJob => "careercompass.selectedJob",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

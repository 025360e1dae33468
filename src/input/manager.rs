//! Input manager for resume documents

use crate::error::Result;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, PdfExtractor, PlainTextExtractor, RawTextExtractor, TextExtractor,
};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::lexicon::SkillMatcher;
use crate::processing::profile::resume_skills;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const RESUME_READ_FAILED: &str = "Could not read that file. Try .pdf, .docx, or .txt";

/// Result of reading a resume: never an error, failures carry a status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeOutcome {
    pub file_name: String,
    pub skills: Vec<String>,
    pub status: String,
    pub succeeded: bool,
}

/// Routes resume documents to the extractor for their file type
#[derive(Debug, Default, Clone, Copy)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Plain text of a resume document, routed by extension
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Csv | FileType::Unknown => {
                info!("Reading unrecognized file as raw text: {}", path.display());
                RawTextExtractor.extract(path).await
            }
        }
    }

    /// Extract skills from a resume. Extraction failures reset the skill list
    /// and report a status message instead of failing.
    pub async fn read_resume(
        &self,
        path: &Path,
        matcher: &SkillMatcher,
        keywords: &KeywordExtractor,
        keyword_limit: usize,
    ) -> ResumeOutcome {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match self.extract_text(path).await {
            Ok(text) => {
                let skills = resume_skills(matcher, keywords, &text, keyword_limit);
                info!("Extracted {} keywords from {}", skills.len(), file_name);
                ResumeOutcome {
                    status: format!("Extracted {} keywords from {}", skills.len(), file_name),
                    file_name,
                    skills,
                    succeeded: true,
                }
            }
            Err(e) => {
                warn!("Failed to read resume {}: {}", path.display(), e);
                ResumeOutcome {
                    file_name,
                    skills: Vec::new(),
                    status: RESUME_READ_FAILED.to_string(),
                    succeeded: false,
                }
            }
        }
    }
}

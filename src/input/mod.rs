//! Input processing module
//! Handles file detection, CSV sources, resume text extraction and input management

pub mod file_detector;
pub mod csv_source;
pub mod text_extractor;
pub mod manager;

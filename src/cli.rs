//! CLI interface for job compass

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-compass")]
#[command(about = "Aggregate job postings, match them against your skills and plan what to learn")]
#[command(long_about = "Load job postings from CSV exports, deduplicate them across sources, score them against your skill profile and build a weekly learning roadmap for the gaps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load bundled datasets, or add CSV files as extra sources
    Load {
        /// CSV files to add (bundled datasets are loaded when omitted)
        files: Vec<PathBuf>,
    },

    /// List jobs with their match score
    Jobs {
        /// Text to find in title, company or description
        #[arg(short, long)]
        query: Option<String>,

        /// Location substring
        #[arg(short, long)]
        location: Option<String>,

        /// Minimum salary
        #[arg(long)]
        min_salary: Option<String>,

        /// Technology to find in title, description or skills
        #[arg(short, long)]
        tech: Option<String>,

        /// Only jobs from this source ("all" for every source)
        #[arg(short, long)]
        source: Option<String>,

        /// Maximum number of jobs to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Include rejected jobs
        #[arg(long, conflicts_with = "ranked")]
        include_rejected: bool,

        /// Best match first, leaving out saved and rejected jobs
        #[arg(short, long)]
        ranked: bool,
    },

    /// Show one job in detail
    Show {
        /// Job id
        id: String,
    },

    /// Manage manually entered skills
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },

    /// Manage the uploaded resume
    Resume {
        #[command(subcommand)]
        action: ResumeAction,
    },

    /// Toggle a job in the saved list
    Save {
        /// Job id
        id: String,
    },

    /// Remove a job from the saved list
    Unsave {
        /// Job id
        id: String,
    },

    /// Hide a job from listings
    Reject {
        /// Job id
        id: String,
    },

    /// Undo a rejection
    Unreject {
        /// Job id
        id: String,
    },

    /// Select the job the roadmap is built for
    Select {
        /// Job id
        id: String,
    },

    /// Application tracker
    Track {
        #[command(subcommand)]
        action: TrackAction,
    },

    /// Build a learning roadmap for the selected (or first saved) job
    Roadmap {
        /// Job id to plan for instead of the selection
        #[arg(short, long)]
        job: Option<String>,

        /// Number of weeks
        #[arg(short, long)]
        weeks: Option<usize>,
    },

    /// Manage extra CSV sources
    Sources {
        #[command(subcommand)]
        action: SourcesAction,
    },

    /// Clear saved, rejected, tracker, resume, selection and extra source data (manual skills are kept)
    Reset,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SkillsAction {
    /// Replace the manual skill list (comma or newline separated)
    Set {
        /// Skill text
        text: String,
    },

    /// Show the combined skill profile
    Show,
}

#[derive(Subcommand)]
pub enum ResumeAction {
    /// Extract skills from a resume (.pdf, .docx, .txt)
    Add {
        /// Path to resume file
        file: PathBuf,
    },

    /// Forget the uploaded resume
    Clear,
}

#[derive(Subcommand)]
pub enum TrackAction {
    /// Set the application status of a job
    Status {
        /// Job id
        id: String,

        /// Saved, Applied, Interview, Offer or Rejected
        status: String,
    },

    /// Set notes for a job
    Notes {
        /// Job id
        id: String,

        /// Note text
        text: String,
    },

    /// List tracked applications
    List,
}

#[derive(Subcommand)]
pub enum SourcesAction {
    /// List loaded sources
    List,

    /// Remove every extra CSV source and the data attached to its jobs
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(crate::config::OutputFormat::Json));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("a.CSV"), &["csv", "txt"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("a.xlsx"), &["csv", "txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("a"), &["csv"]).is_err());
    }

    #[test]
    fn test_parse_jobs_command() {
        let cli = Cli::parse_from(["job-compass", "jobs", "--tech", "rust", "-n", "5"]);
        match cli.command {
            Commands::Jobs { tech, limit, ranked, .. } => {
                assert_eq!(tech.as_deref(), Some("rust"));
                assert_eq!(limit, Some(5));
                assert!(!ranked);
            }
            _ => panic!("expected jobs command"),
        }
    }

    #[test]
    fn test_ranked_conflicts_with_include_rejected() {
        assert!(Cli::try_parse_from(["job-compass", "jobs", "--ranked"]).is_ok());
        assert!(Cli::try_parse_from(["job-compass", "jobs", "--ranked", "--include-rejected"]).is_err());
    }
}

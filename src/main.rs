//! Job compass: multi-source job aggregation, skill matching and learning roadmaps

use anyhow::Context;
use clap::Parser;
use job_compass::board::{JobBoard, LoadReport};
use job_compass::cli::{
    self, Cli, Commands, ConfigAction, ResumeAction, SkillsAction, SourcesAction, TrackAction,
};
use job_compass::config::{Config, OutputFormat};
use job_compass::error::{CompassError, Result};
use job_compass::input::csv_source::source_label_for_path;
use job_compass::input::manager::InputManager;
use job_compass::output::formatter::{formatter_for, OutputFormatter};
use job_compass::output::report::{
    tracker_entries, JobDetailReport, JobListReport, ListOptions, ProfileReport, Report,
    SourcesReport,
};
use job_compass::processing::filter::JobFilter;
use job_compass::processing::keywords::KeywordExtractor;
use job_compass::processing::lexicon::SkillMatcher;
use job_compass::store::json_store::JsonStore;
use job_compass::store::tracker::ApplicationStatus;
use job_compass::store::user::UserData;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let format = match cli.format.as_deref() {
        Some(format) => match cli::parse_output_format(format) {
            Ok(format) => format,
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => config.output.format,
    };

    let formatter = formatter_for(format, config.output.color_output);
    if let Err(e) = run_command(cli.command, config, &config_path, formatter.as_ref()).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

/// Bundled datasets followed by the remembered extra uploads
async fn load_board(board: &mut JobBoard, config: &Config, user: &UserData) -> Result<LoadReport> {
    let mut paths = config.dataset_paths();
    paths.extend(user.extra_sources.iter().map(PathBuf::from));
    board.load_csv_files(&paths).await
}

fn print(formatter: &dyn OutputFormatter, report: &Report) -> Result<()> {
    print!("{}", formatter.format_report(report)?);
    if formatter.supports_format() == OutputFormat::Json {
        println!();
    }
    Ok(())
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: &Path,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if let Commands::Config { action } = &command {
        match action {
            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                info!("Configuration reset to defaults at {}", config_path.display());
                println!("Configuration reset to defaults");
            }
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", config_path.display());
                println!("Datasets directory: {}", config.data.datasets_dir.display());
                let content =
                    toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("{}", content);
            }
        }
        return Ok(());
    }

    let matcher = Arc::new(SkillMatcher::with_additional(&config.skills.extra_lexicon)?);
    debug!("Skill matcher ready with {} lexicon entries", matcher.skill_count());
    let mut store = JsonStore::open(config.storage.state_file.clone())?;
    let mut user = UserData::load(&store);
    let mut board = JobBoard::new(Arc::clone(&matcher));

    match command {
        Commands::Load { files } => {
            let base = load_board(&mut board, &config, &user).await?;
            if files.is_empty() {
                return print(formatter, &Report::Load(base));
            }

            for file in &files {
                cli::validate_file_extension(file, &["csv", "txt"])
                    .map_err(|e| CompassError::UnsupportedFormat(format!("{}: {}", file.display(), e)))?;
            }

            let report = board.load_csv_files(&files).await?;
            for file in &files {
                let path = file.display().to_string();
                let failed = report.failed.iter().any(|f| f.path == path);
                if !failed && !user.extra_sources.contains(&path) {
                    user.extra_sources.push(path);
                }
            }
            user.persist(&mut store)?;
            print(formatter, &Report::Load(report))
        }

        Commands::Jobs {
            query,
            location,
            min_salary,
            tech,
            source,
            limit,
            include_rejected,
            ranked,
        } => {
            load_board(&mut board, &config, &user).await?;
            let filter = JobFilter {
                query,
                location,
                min_salary,
                tech,
                source,
            };
            let options = ListOptions {
                limit: limit.unwrap_or(config.output.list_limit),
                include_rejected,
                ranked,
            };
            let report = JobListReport::build(&board, &filter, &user, options);
            print(formatter, &Report::Jobs(report))
        }

        Commands::Show { id } => {
            load_board(&mut board, &config, &user).await?;
            let job = board.require(&id)?;
            print(formatter, &Report::Job(Box::new(JobDetailReport::build(job, &user))))
        }

        Commands::Skills { action } => {
            if let SkillsAction::Set { text } = action {
                user.manual_skills = text;
                user.persist(&mut store)?;
            }
            print(formatter, &Report::Profile(ProfileReport::build(&user)))
        }

        Commands::Resume { action } => match action {
            ResumeAction::Add { file } => {
                let input_manager = InputManager::new();
                let keywords = KeywordExtractor::new(
                    config.skills.min_keyword_len,
                    config.skills.max_keyword_len,
                );
                let outcome = input_manager
                    .read_resume(&file, &matcher, &keywords, config.skills.resume_keyword_limit)
                    .await;

                user.resume_skills = outcome.skills.clone();
                user.resume_file = if outcome.succeeded {
                    outcome.file_name.clone()
                } else {
                    String::new()
                };
                user.persist(&mut store)?;
                print(formatter, &Report::Resume(outcome))
            }
            ResumeAction::Clear => {
                user.clear_resume();
                user.persist(&mut store)?;
                print(formatter, &Report::Message("Resume cleared".to_string()))
            }
        },

        Commands::Save { id } => {
            load_board(&mut board, &config, &user).await?;
            let job = board.require(&id)?;
            let message = if user.toggle_saved(&job.id) {
                format!("Saved {} at {}", job.title, job.company)
            } else {
                format!("Removed {} at {} from saved jobs", job.title, job.company)
            };
            user.persist(&mut store)?;
            print(formatter, &Report::Message(message))
        }

        Commands::Unsave { id } => {
            user.saved.remove(&id);
            user.persist(&mut store)?;
            print(formatter, &Report::Message(format!("Removed {} from saved jobs", id)))
        }

        Commands::Reject { id } => {
            load_board(&mut board, &config, &user).await?;
            let job = board.require(&id)?;
            user.rejected.insert(job.id.clone());
            user.persist(&mut store)?;
            print(formatter, &Report::Message(format!("Rejected {} at {}", job.title, job.company)))
        }

        Commands::Unreject { id } => {
            user.rejected.remove(&id);
            user.persist(&mut store)?;
            print(formatter, &Report::Message(format!("Restored {}", id)))
        }

        Commands::Select { id } => {
            load_board(&mut board, &config, &user).await?;
            let job = board.require(&id)?;
            user.selected_job = Some(job.id.clone());
            user.persist(&mut store)?;
            print(formatter, &Report::Message(format!("Selected {} at {}", job.title, job.company)))
        }

        Commands::Track { action } => {
            let now = chrono::Utc::now();
            match action {
                TrackAction::Status { id, status } => {
                    let status: ApplicationStatus = status.parse()?;
                    load_board(&mut board, &config, &user).await?;
                    let job = board.require(&id)?;
                    user.applications.set_status(&job.id, status, now);
                    user.persist(&mut store)?;
                    print(
                        formatter,
                        &Report::Message(format!("{} at {} marked {}", job.title, job.company, status)),
                    )
                }
                TrackAction::Notes { id, text } => {
                    load_board(&mut board, &config, &user).await?;
                    let job = board.require(&id)?;
                    user.applications.set_notes(&job.id, &text, now);
                    user.persist(&mut store)?;
                    print(
                        formatter,
                        &Report::Message(format!("Notes updated for {} at {}", job.title, job.company)),
                    )
                }
                TrackAction::List => {
                    load_board(&mut board, &config, &user).await?;
                    print(formatter, &Report::Tracker(tracker_entries(&board, &user)))
                }
            }
        }

        Commands::Roadmap { job, weeks } => {
            load_board(&mut board, &config, &user).await?;
            let selected = job.as_deref().or(user.selected_job.as_deref());
            let weeks = weeks.unwrap_or(config.roadmap.weeks);
            let plan = board.roadmap(selected, &user.saved, &user.profile(), weeks);
            print(formatter, &Report::Roadmap(plan))
        }

        Commands::Sources { action } => {
            load_board(&mut board, &config, &user).await?;
            if let SourcesAction::Clear = action {
                let labels: Vec<String> = user
                    .extra_sources
                    .iter()
                    .map(|path| source_label_for_path(Path::new(path)))
                    .collect();
                let removed = board.remove_sources(&labels);
                user.forget_jobs(&removed);
                user.extra_sources.clear();
                user.persist(&mut store)?;
                info!("Cleared {} extra sources", labels.len());
            }
            print(
                formatter,
                &Report::Sources(SourcesReport {
                    sources: board.sources(),
                    extra_sources: user.extra_sources.clone(),
                    jobs: board.len(),
                }),
            )
        }

        Commands::Reset => {
            user.reset(&mut store)?;
            print(
                formatter,
                &Report::Message("Cleared saved, rejected, tracker and resume data".to_string()),
            )
        }

        Commands::Config { .. } => Ok(()),
    }
}

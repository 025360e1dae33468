//! Output formatters: colored console text and JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::scoring::ScoreClass;
use colored::{Color, Colorize};

/// Trait for rendering command reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human readable console output
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output for scripting
pub struct JsonFormatter {
    pretty: bool,
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_score(&self, score: u32, class: ScoreClass) -> String {
        let color = match class {
            ScoreClass::Good => Color::Green,
            ScoreClass::Warn => Color::Yellow,
            ScoreClass::Bad => Color::Red,
        };
        let text = format!("{:>3}%", score);
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            format!("{} [{}]", text, class)
        }
    }

    fn format_skills(skills: &[String]) -> String {
        if skills.is_empty() {
            "-".to_string()
        } else {
            skills.join(", ")
        }
    }

    fn format_load(&self, report: &crate::board::LoadReport, output: &mut String) {
        output.push_str(&self.format_header("Load"));
        output.push_str(&format!(
            "Loaded {} jobs ({} rows rejected) from {}\n",
            report.loaded,
            report.rejected,
            if report.sources.is_empty() {
                "no sources".to_string()
            } else {
                report.sources.join(", ")
            }
        ));
        for failure in &report.failed {
            output.push_str(&format!(
                "  {} {}: {}\n",
                self.colorize("failed", Color::Red),
                failure.path,
                failure.reason
            ));
        }
    }

    fn format_row_line(&self, row: &JobRow) -> String {
        let mut flags = Vec::new();
        if row.saved {
            flags.push("saved".to_string());
        }
        if row.rejected {
            flags.push("rejected".to_string());
        }
        if let Some(status) = row.status {
            flags.push(status.to_string());
        }

        let mut line = format!(
            "{}  {}  {} | {} | {}",
            self.format_score(row.result.score, row.class),
            self.colorize(&row.job.id, Color::BrightBlack),
            self.colorize(&row.job.title, Color::Cyan),
            row.job.company,
            row.job.location
        );
        if !row.job.salary_text.is_empty() {
            line.push_str(&format!(" | {}", row.job.salary_text));
        }
        line.push_str(&format!(" [{}]", row.job.source));
        if !flags.is_empty() {
            line.push_str(&format!(" ({})", flags.join(", ")));
        }
        line.push('\n');
        line
    }

    fn format_jobs(&self, report: &JobListReport, output: &mut String) {
        output.push_str(&self.format_header(if report.ranked { "Best matches" } else { "Jobs" }));
        output.push_str(&format!(
            "Showing {} of {} matching ({} total)\n",
            report.jobs.len(),
            report.matching,
            report.total
        ));
        for row in &report.jobs {
            output.push_str(&self.format_row_line(row));
        }
    }

    fn format_job(&self, detail: &JobDetailReport, output: &mut String) {
        let job = &detail.row.job;
        output.push_str(&self.format_header(&job.title));
        output.push_str(&format!("Id:       {}\n", job.id));
        output.push_str(&format!("Company:  {}\n", job.company));
        output.push_str(&format!("Location: {}\n", job.location));
        if !job.salary_text.is_empty() {
            output.push_str(&format!("Salary:   {}\n", job.salary_text));
        }
        if !job.posted.is_empty() {
            output.push_str(&format!("Posted:   {}\n", job.posted));
        }
        if !job.url.is_empty() {
            output.push_str(&format!("Link:     {}\n", job.url));
        }
        output.push_str(&format!("Source:   {}\n", job.source));
        output.push_str(&format!(
            "Match:    {} ({} of {} skills)\n",
            self.format_score(detail.row.result.score, detail.row.class),
            detail.row.result.overlap,
            detail.row.result.total
        ));
        output.push_str(&format!(
            "Have:     {}\n",
            self.colorize(&Self::format_skills(&detail.matched), Color::Green)
        ));
        output.push_str(&format!(
            "Missing:  {}\n",
            self.colorize(&Self::format_skills(&detail.missing), Color::Yellow)
        ));

        let mut flags = Vec::new();
        if detail.row.saved {
            flags.push("saved");
        }
        if detail.row.rejected {
            flags.push("rejected");
        }
        if detail.selected {
            flags.push("selected");
        }
        if !flags.is_empty() {
            output.push_str(&format!("Flags:    {}\n", flags.join(", ")));
        }

        if let Some(record) = &detail.record {
            output.push_str(&format!("Status:   {}\n", record.status));
            if !record.notes.is_empty() {
                output.push_str(&format!("Notes:    {}\n", record.notes));
            }
        }

        if !job.description.is_empty() {
            output.push_str(&format!("\n{}\n", job.description));
        }
    }

    fn format_profile(&self, profile: &ProfileReport, output: &mut String) {
        output.push_str(&self.format_header("Skills"));
        output.push_str(&format!("Manual: {}\n", Self::format_skills(&profile.manual_skills)));
        if profile.resume_file.is_empty() {
            output.push_str("Resume: none\n");
        } else {
            output.push_str(&format!(
                "Resume: {} ({})\n",
                profile.resume_file,
                Self::format_skills(&profile.resume_skills)
            ));
        }
        output.push_str(&format!(
            "Profile ({}): {}\n",
            profile.profile.len(),
            self.colorize(&Self::format_skills(&profile.profile), Color::Green)
        ));
    }

    fn format_resume(&self, outcome: &crate::input::manager::ResumeOutcome, output: &mut String) {
        let color = if outcome.succeeded { Color::Green } else { Color::Red };
        output.push_str(&format!("{}\n", self.colorize(&outcome.status, color)));
        if !outcome.skills.is_empty() {
            output.push_str(&format!("Skills: {}\n", Self::format_skills(&outcome.skills)));
        }
    }

    fn format_roadmap(&self, plan: &crate::processing::roadmap::RoadmapPlan, output: &mut String) {
        output.push_str(&self.format_header("Roadmap"));
        let job = match &plan.job {
            Some(job) => job,
            None => {
                output.push_str("Select or save a job to build a roadmap\n");
                return;
            }
        };

        output.push_str(&format!("Target: {} at {}\n", job.title, job.company));
        if plan.gaps.is_empty() {
            output.push_str(&format!(
                "{}\n",
                self.colorize("No skill gaps, you cover every listed skill", Color::Green)
            ));
            return;
        }

        output.push_str(&format!("Gaps: {}\n", plan.gaps.join(", ")));
        for bucket in &plan.plan {
            output.push_str(&format!(
                "  Week {}: {}\n",
                bucket.week,
                if bucket.items.is_empty() {
                    self.colorize("review and practice", Color::BrightBlack)
                } else {
                    bucket.items.join(", ")
                }
            ));
        }
    }

    fn format_tracker(&self, entries: &[TrackerEntry], output: &mut String) {
        output.push_str(&self.format_header("Applications"));
        if entries.is_empty() {
            output.push_str("No tracked applications\n");
            return;
        }
        for entry in entries {
            let label = format!("{} | {}", entry.title, entry.company);
            let updated = entry
                .record
                .updated_at
                .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_default();
            output.push_str(&format!(
                "{:<10} {}  {}  {}\n",
                entry.record.status.to_string(),
                self.colorize(&entry.job_id, Color::BrightBlack),
                label,
                updated
            ));
            if !entry.record.notes.is_empty() {
                output.push_str(&format!("           {}\n", entry.record.notes));
            }
        }
    }

    fn format_sources(&self, report: &SourcesReport, output: &mut String) {
        output.push_str(&self.format_header("Sources"));
        output.push_str(&format!("{} jobs from: {}\n", report.jobs, Self::format_skills(&report.sources)));
        if !report.extra_sources.is_empty() {
            output.push_str("Extra uploads:\n");
            for path in &report.extra_sources {
                output.push_str(&format!("  • {}\n", path));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        match report {
            Report::Load(load) => self.format_load(load, &mut output),
            Report::Jobs(jobs) => self.format_jobs(jobs, &mut output),
            Report::Job(detail) => self.format_job(detail, &mut output),
            Report::Profile(profile) => self.format_profile(profile, &mut output),
            Report::Resume(outcome) => self.format_resume(outcome, &mut output),
            Report::Roadmap(plan) => self.format_roadmap(plan, &mut output),
            Report::Tracker(entries) => self.format_tracker(entries, &mut output),
            Report::Sources(sources) => self.format_sources(sources, &mut output),
            Report::Message(message) => {
                output.push_str(message);
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::job::Job;
    use crate::processing::roadmap::{RoadmapPlan, WeekBucket};
    use crate::processing::scoring::MatchResult;

    fn job() -> Job {
        Job {
            id: "abc123".to_string(),
            title: "Data Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Singapore".to_string(),
            salary_text: "SGD 6,000".to_string(),
            salary_number: Some(6000.0),
            url: String::new(),
            description: String::new(),
            posted: String::new(),
            source: "indeed".to_string(),
            skills: vec!["python".to_string(), "sql".to_string()],
        }
    }

    #[test]
    fn test_console_job_list_without_colors() {
        let formatter = ConsoleFormatter::new(false);
        let report = Report::Jobs(JobListReport {
            matching: 1,
            total: 3,
            ranked: false,
            jobs: vec![JobRow {
                job: job(),
                result: MatchResult { score: 50, overlap: 1, total: 2 },
                class: ScoreClass::Warn,
                saved: true,
                rejected: false,
                status: None,
            }],
        });

        let text = formatter.format_report(&report).unwrap();
        assert!(text.contains("Showing 1 of 1 matching (3 total)"));
        assert!(text.contains(" 50% [warn]"));
        assert!(text.contains("Data Engineer | Acme | Singapore | SGD 6,000 [indeed] (saved)"));
    }

    #[test]
    fn test_console_roadmap_without_target() {
        let formatter = ConsoleFormatter::new(false);
        let text = formatter.format_report(&Report::Roadmap(RoadmapPlan::empty())).unwrap();
        assert!(text.contains("Select or save a job"));
    }

    #[test]
    fn test_console_roadmap_weeks() {
        let formatter = ConsoleFormatter::new(false);
        let plan = RoadmapPlan {
            job: Some(job()),
            gaps: vec!["sql".to_string()],
            plan: vec![
                WeekBucket { week: 1, items: vec!["sql".to_string()] },
                WeekBucket { week: 2, items: vec![] },
            ],
        };
        let text = formatter.format_report(&Report::Roadmap(plan)).unwrap();
        assert!(text.contains("Week 1: sql"));
        assert!(text.contains("Week 2: review and practice"));
    }

    #[test]
    fn test_json_report_is_tagged() {
        let formatter = JsonFormatter::new(false);
        let text = formatter
            .format_report(&Report::Message("done".to_string()))
            .unwrap();
        assert_eq!(text, r#"{"kind":"message","data":"done"}"#);
        assert_eq!(formatter.supports_format(), OutputFormat::Json);
    }

    #[test]
    fn test_formatter_for() {
        assert_eq!(formatter_for(OutputFormat::Console, false).supports_format(), OutputFormat::Console);
        assert_eq!(formatter_for(OutputFormat::Json, false).supports_format(), OutputFormat::Json);
    }
}

//! Configuration management for job compass

use crate::error::{CompassError, Result};
use crate::processing::keywords::{DEFAULT_KEYWORD_LIMIT, MAX_KEYWORD_LEN, MIN_KEYWORD_LEN};
use crate::processing::roadmap::DEFAULT_WEEKS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub skills: SkillsConfig,
    pub roadmap: RoadmapConfig,
    pub output: OutputConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the bundled datasets; relative paths resolve
    /// against the directory of the config file
    pub datasets_dir: PathBuf,
    pub default_datasets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Entries appended to the built-in skill lexicon
    pub extra_lexicon: Vec<String>,
    pub resume_keyword_limit: usize,
    pub min_keyword_len: usize,
    pub max_keyword_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapConfig {
    pub weeks: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub list_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub state_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        let app_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-compass");

        Self {
            data: DataConfig {
                datasets_dir: Self::bundled_datasets_dir(),
                default_datasets: vec![
                    "mycareersfuture.csv".to_string(),
                    "jobstreet.csv".to_string(),
                    "indeed.csv".to_string(),
                    "glassdoor.csv".to_string(),
                    "efinancialcareers.csv".to_string(),
                ],
            },
            skills: SkillsConfig {
                extra_lexicon: Vec::new(),
                resume_keyword_limit: DEFAULT_KEYWORD_LIMIT,
                min_keyword_len: MIN_KEYWORD_LEN,
                max_keyword_len: MAX_KEYWORD_LEN,
            },
            roadmap: RoadmapConfig {
                weeks: DEFAULT_WEEKS,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                list_limit: 25,
            },
            storage: StorageConfig {
                state_file: app_dir.join("state.json"),
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let mut config: Config = toml::from_str(&content)
                .map_err(|e| CompassError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            if config.data.datasets_dir.is_relative() {
                if let Some(base) = config_path.parent() {
                    config.data.datasets_dir = base.join(&config.data.datasets_dir);
                }
            }
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CompassError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-compass")
            .join("config.toml")
    }

    /// The `data/` directory shipped next to the crate manifest
    pub fn bundled_datasets_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn validate(&self) -> Result<()> {
        if self.roadmap.weeks == 0 {
            return Err(CompassError::Configuration(
                "roadmap.weeks must be at least 1".to_string(),
            ));
        }
        if self.skills.min_keyword_len > self.skills.max_keyword_len {
            return Err(CompassError::Configuration(format!(
                "skills.min_keyword_len ({}) exceeds skills.max_keyword_len ({})",
                self.skills.min_keyword_len, self.skills.max_keyword_len
            )));
        }
        Ok(())
    }

    /// Paths of the bundled datasets
    pub fn dataset_paths(&self) -> Vec<PathBuf> {
        self.data
            .default_datasets
            .iter()
            .map(|name| self.data.datasets_dir.join(name))
            .collect()
    }
}

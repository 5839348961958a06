//! Configuration management for the resume checker

use crate::error::{Result, ResumeCheckerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub scoring: ScoringConfig,
    pub storage: StorageConfig,
    /// Reference skill vocabulary. Lowercase entries; drives both skill
    /// extraction and missing-skill detection without code changes.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// HuggingFace repo id or local path of the Model2Vec embedding model.
    pub embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight applied to the keyword-overlap score.
    pub weight_keywords: f32,
    /// Weight applied to the embedding cosine-similarity score.
    ///
    /// The two weights are not required to sum to 1 and are never
    /// normalized; the final score scales accordingly.
    pub weight_semantics: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let database_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resume-checker")
            .join("evaluations.db");

        Self {
            models: ModelConfig {
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            scoring: ScoringConfig {
                weight_keywords: 0.5,
                weight_semantics: 0.5,
            },
            storage: StorageConfig { database_path },
            skills: default_skills(),
        }
    }
}

/// Default reference vocabulary of recognized skill keywords.
pub fn default_skills() -> Vec<String> {
    [
        "python",
        "java",
        "sql",
        "ml",
        "machine learning",
        "cloud",
        "docker",
        "kubernetes",
        "excel",
        "c++",
        "tensorflow",
        "pytorch",
        "aws",
        "azure",
        "linux",
        "git",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location (writing the defaults on first use).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeCheckerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else if path.is_some() {
            Err(ResumeCheckerError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeCheckerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-checker")
            .join("config.toml")
    }
}

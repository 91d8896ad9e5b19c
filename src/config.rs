//! Configuration management for skillmatch

use crate::error::{Result, SkillMatchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// User additions merged into the built-in skill dictionary. Everything
/// is normalized to lower-case and validated against the dictionary
/// rules when the engine is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub extra_technical_skills: Vec<String>,
    pub extra_soft_skills: Vec<String>,
    pub extra_synonyms: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub technical_weight: f64,
    pub soft_weight: f64,
    /// Skills whose absence weighs extra in suggestion ranking.
    pub critical_skills: Vec<String>,
    pub critical_boost: f64,
    /// Job-side mention count at which importance saturates.
    pub frequency_saturation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            technical_weight: 0.7,
            soft_weight: 0.3,
            critical_skills: vec![
                "python".to_string(),
                "javascript".to_string(),
                "react".to_string(),
                "sql".to_string(),
                "aws".to_string(),
                "leadership".to_string(),
                "communication".to_string(),
            ],
            critical_boost: 1.5,
            frequency_saturation: 3.0,
        }
    }
}

impl ScoringConfig {
    pub fn is_critical(&self, skill: &str) -> bool {
        self.critical_skills
            .iter()
            .any(|critical| critical.eq_ignore_ascii_case(skill))
    }

    pub fn validate(&self) -> Result<()> {
        let total = self.technical_weight + self.soft_weight;
        if self.technical_weight < 0.0 || self.soft_weight < 0.0 || !(total > 0.0) {
            return Err(SkillMatchError::Configuration(
                "scoring weights must be non-negative with a positive sum".to_string(),
            ));
        }
        if !(self.frequency_saturation > 0.0) {
            return Err(SkillMatchError::Configuration(
                "frequency_saturation must be positive".to_string(),
            ));
        }
        if self.critical_boost < 0.0 {
            return Err(SkillMatchError::Configuration(
                "critical_boost cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Loads from an explicit path, writing the default config there on
    /// first use, same as the default-path flow.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                SkillMatchError::Configuration(format!("Failed to parse config: {}", e))
            })?;
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
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillMatchError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillmatch")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.scoring.validate().is_ok());
        assert_eq!(config.scoring.critical_skills.len(), 7);
        assert!(config.dictionary.extra_technical_skills.is_empty());
        assert!(matches!(config.output.format, OutputFormat::Console));
    }

    #[test]
    fn test_is_critical_ignores_case() {
        let scoring = ScoringConfig::default();
        assert!(scoring.is_critical("python"));
        assert!(scoring.is_critical("Python"));
        assert!(!scoring.is_critical("cobol"));
    }

    #[test]
    fn test_validate_rejects_zero_weights() {
        let scoring = ScoringConfig {
            technical_weight: 0.0,
            soft_weight: 0.0,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let scoring = ScoringConfig {
            technical_weight: -0.5,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_saturation() {
        let scoring = ScoringConfig {
            frequency_saturation: 0.0,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.technical_weight = 0.6;
        config.scoring.soft_weight = 0.4;
        config
            .dictionary
            .extra_technical_skills
            .push("terraform".to_string());
        config
            .dictionary
            .extra_synonyms
            .insert("terraform".to_string(), vec!["tf".to_string()]);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!((loaded.scoring.technical_weight - 0.6).abs() < 1e-9);
        assert!((loaded.scoring.soft_weight - 0.4).abs() < 1e-9);
        assert_eq!(
            loaded.dictionary.extra_technical_skills,
            vec!["terraform".to_string()]
        );
        assert_eq!(
            loaded.dictionary.extra_synonyms.get("terraform"),
            Some(&vec!["tf".to_string()])
        );
    }

    #[test]
    fn test_load_from_missing_path_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(config.scoring.validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}

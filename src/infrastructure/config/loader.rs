//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::{Config, GeneratorProvider, StorageBackend};

/// Project-local configuration directory
pub const CONFIG_DIR: &str = ".mock-interview";
/// Project config written by `init`
pub const CONFIG_FILE: &str = ".mock-interview/config.yaml";
/// Optional untracked overrides
pub const LOCAL_CONFIG_FILE: &str = ".mock-interview/local.yaml";
/// Prefix for environment overrides; `__` separates sections
pub const ENV_PREFIX: &str = "MOCK_INTERVIEW_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// question_count outside 1..=50
    #[error("Invalid question_count: {0}. Must be between 1 and 50")]
    InvalidQuestionCount(usize),

    /// countdown_secs of zero
    #[error("Invalid countdown_secs: {0}. Must be at least 1")]
    InvalidCountdown(u32),

    /// tick_millis of zero
    #[error("Invalid tick_millis: {0}. Must be at least 1")]
    InvalidTick(u64),

    /// generator_timeout_secs of zero
    #[error("Invalid generator_timeout_secs: {0}. Must be at least 1")]
    InvalidGeneratorTimeout(u64),

    /// score_min above score_max, or score_max above 100
    #[error("Invalid score range: {0}..={1}. Need min <= max <= 100")]
    InvalidScoreRange(u8, u8),

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// SQLite backend without a path
    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    /// SQLite pool size of zero
    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    /// Temperature outside 0.0..=2.0
    #[error("Invalid temperature: {0}. Must be between 0.0 and 2.0")]
    InvalidTemperature(f32),

    /// Provider name and field
    #[error("Generator {0} needs a non-empty {1}")]
    MissingGeneratorField(&'static str, &'static str),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `.mock-interview/config.yaml` (written by `init`)
    /// 3. `.mock-interview/local.yaml` (optional overrides)
    /// 4. `MOCK_INTERVIEW_*` environment variables, `__` separating sections
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let interview = &config.interview;
        if interview.question_count == 0 || interview.question_count > 50 {
            return Err(ConfigError::InvalidQuestionCount(interview.question_count));
        }
        if interview.countdown_secs == 0 {
            return Err(ConfigError::InvalidCountdown(interview.countdown_secs));
        }
        if interview.tick_millis == 0 {
            return Err(ConfigError::InvalidTick(interview.tick_millis));
        }
        if interview.generator_timeout_secs == 0 {
            return Err(ConfigError::InvalidGeneratorTimeout(interview.generator_timeout_secs));
        }
        if interview.score_min > interview.score_max || interview.score_max > 100 {
            return Err(ConfigError::InvalidScoreRange(interview.score_min, interview.score_max));
        }

        if config.storage.backend == StorageBackend::Sqlite {
            if config.storage.path.trim().is_empty() {
                return Err(ConfigError::EmptyDatabasePath);
            }
            if config.storage.max_connections == 0 {
                return Err(ConfigError::InvalidMaxConnections(config.storage.max_connections));
            }
        }

        let generator = &config.generator;
        if !(0.0..=2.0).contains(&generator.temperature) {
            return Err(ConfigError::InvalidTemperature(generator.temperature));
        }
        if generator.provider == GeneratorProvider::Gemini {
            if generator.base_url.trim().is_empty() {
                return Err(ConfigError::MissingGeneratorField("gemini", "base_url"));
            }
            if generator.model.trim().is_empty() {
                return Err(ConfigError::MissingGeneratorField("gemini", "model"));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }

    /// Write `config` as YAML to `path`, creating parent directories.
    pub fn write_to_file(config: &Config, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
        std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::LogFormat;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.interview.question_count, 5);
        assert_eq!(config.interview.countdown_secs, 120);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.generator.provider, GeneratorProvider::Scripted);
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
interview:
  question_count: 3
  countdown_secs: 60
storage:
  backend: sqlite
  path: /tmp/interviews.db
generator:
  provider: gemini
  model: gemini-pro
logging:
  level: debug
  format: json
";
        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.interview.question_count, 3);
        assert_eq!(config.interview.countdown_secs, 60);
        assert_eq!(config.interview.score_min, 80);
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.max_connections, 5);
        assert_eq!(config.generator.provider, GeneratorProvider::Gemini);
        assert_eq!(config.logging.format, LogFormat::Json);
        ConfigLoader::validate(&config).unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_questions() {
        let mut config = Config::default();
        config.interview.question_count = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidQuestionCount(0))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_score_range() {
        let mut config = Config::default();
        config.interview.score_min = 95;
        config.interview.score_max = 90;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidScoreRange(95, 90))
        ));

        config.interview.score_min = 90;
        config.interview.score_max = 101;
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_empty_path_only_matters_for_sqlite() {
        let mut config = Config::default();
        config.storage.path = String::new();
        ConfigLoader::validate(&config).unwrap();

        config.storage.backend = StorageBackend::Sqlite;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyDatabasePath)
        ));
    }

    #[test]
    fn test_write_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.yaml");

        let mut config = Config::default();
        config.interview.question_count = 7;
        config.storage.backend = StorageBackend::Sqlite;
        ConfigLoader::write_to_file(&config, &path).unwrap();

        let loaded = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(loaded.interview.question_count, 7);
        assert_eq!(loaded.storage.backend, StorageBackend::Sqlite);
    }
}

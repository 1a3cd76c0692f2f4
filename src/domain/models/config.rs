//! Configuration model, deserialized from YAML and environment overrides.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the mock interview engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Interview session settings
    #[serde(default)]
    pub interview: InterviewSettings,

    /// Session storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Question and feedback generator configuration
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interview session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InterviewSettings {
    /// Number of questions asked per session
    #[serde(default = "default_question_count")]
    pub question_count: usize,

    /// Countdown length per question, in ticks
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u32,

    /// Interval between countdown ticks in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    /// Upper bound on a single generator call before fallback content is used
    #[serde(default = "default_generator_timeout_secs")]
    pub generator_timeout_secs: u64,

    /// Lowest simulated score
    #[serde(default = "default_score_min")]
    pub score_min: u8,

    /// Highest simulated score
    #[serde(default = "default_score_max")]
    pub score_max: u8,
}

const fn default_question_count() -> usize {
    5
}

const fn default_countdown_secs() -> u32 {
    120
}

const fn default_tick_millis() -> u64 {
    1000
}

const fn default_generator_timeout_secs() -> u64 {
    30
}

const fn default_score_min() -> u8 {
    80
}

const fn default_score_max() -> u8 {
    100
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            countdown_secs: default_countdown_secs(),
            tick_millis: default_tick_millis(),
            generator_timeout_secs: default_generator_timeout_secs(),
            score_min: default_score_min(),
            score_max: default_score_max(),
        }
    }
}

/// Where session records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Volatile, lost when the process exits
    #[default]
    Memory,
    /// `SQLite` file
    Sqlite,
}

/// Session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Which store to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".mock-interview/interviews.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Which generator produces questions and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorProvider {
    /// Canned offline content
    #[default]
    Scripted,
    /// Google generative language API
    Gemini,
}

/// Question and feedback generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Which generator to use
    #[serde(default)]
    pub provider: GeneratorProvider,

    /// API base URL
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API key (read from `GEMINI_API_KEY` if not set)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: GeneratorProvider::default(),
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            api_key: None,
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GeneratorConfig {
    /// Get API key from config or environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Compact human-readable lines
    #[default]
    Pretty,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// New file each day
    #[default]
    Daily,
    /// New file each hour
    Hourly,
    /// Single file, never rotated
    Never,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation for the log file
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

//! Implementation of the `mock-interview init` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::adapters::sqlite::{database_url, initialize_database, PoolConfig};
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::parse_backend;
use crate::domain::models::{Config, StorageBackend};
use crate::infrastructure::config::{ConfigLoader, CONFIG_FILE};

/// Arguments for `init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,

    /// Storage backend to configure: memory or sqlite
    #[arg(long, value_parser = parse_backend, default_value = "sqlite")]
    pub backend: StorageBackend,
}

/// Result of writing the configuration.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    /// Whether the config was written
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Where the config was written
    pub config_path: PathBuf,
    /// Set when a SQLite database was created.
    pub database_path: Option<String>,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.success {
            lines.push(format!("  Config:   {}", self.config_path.display()));
            if let Some(path) = &self.database_path {
                lines.push(format!("  Database: {path}"));
            }
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Writes the config file and prepares storage.
pub async fn execute(args: InitArgs, config_path: Option<&Path>, json_mode: bool) -> Result<()> {
    let result = initialize(&args, config_path.unwrap_or_else(|| Path::new(CONFIG_FILE))).await?;
    output(&result, json_mode);
    Ok(())
}

/// Writes the default configuration to `config_path` and, for `SQLite`,
/// creates the database with its schema.
pub async fn initialize(args: &InitArgs, config_path: &Path) -> Result<InitOutput> {
    if config_path.exists() && !args.force {
        return Ok(InitOutput {
            success: false,
            message: format!(
                "{} already exists. Use --force to overwrite it.",
                config_path.display()
            ),
            config_path: config_path.to_path_buf(),
            database_path: None,
        });
    }

    let mut config = Config::default();
    config.storage.backend = args.backend;
    ConfigLoader::write_to_file(&config, config_path)?;

    let database_path = if args.backend == StorageBackend::Sqlite {
        let pool = initialize_database(&database_url(&config.storage.path), PoolConfig::from(&config.storage))
            .await
            .context("Failed to initialize database")?;
        pool.close().await;
        Some(config.storage.path.clone())
    } else {
        None
    };

    Ok(InitOutput {
        success: true,
        message: "Mock interview project initialized.".to_string(),
        config_path: config_path.to_path_buf(),
        database_path,
    })
}

//! Wiring from configuration to concrete store and generator.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::generators::create_generator;
use crate::adapters::memory::InMemorySessionStore;
use crate::adapters::sqlite::{database_url, initialize_database, PoolConfig, SqliteSessionStore};
use crate::domain::models::{Config, SimulatedScore, StorageBackend, StorageConfig};
use crate::domain::ports::SessionStore;
use crate::infrastructure::config::ConfigLoader;
use crate::services::ResilientGenerator;

/// Everything a command needs to run an interview
pub struct AppContext {
    /// Loaded configuration
    pub config: Config,
    /// Session store selected by configuration
    pub store: Arc<dyn SessionStore>,
    /// Generator wrapped with timeout and fallback
    pub generator: ResilientGenerator,
}

impl AppContext {
    /// Opens the configured store and generator.
    pub async fn build(config: Config) -> Result<Self> {
        let score = SimulatedScore::new(config.interview.score_min, config.interview.score_max)
            .context("Invalid score range")?;
        let store = open_store(&config.storage, score).await?;
        let inner = create_generator(&config.generator).context("Failed to create generator")?;
        let generator = ResilientGenerator::from_settings(inner, &config.interview);

        debug!(
            backend = ?config.storage.backend,
            provider = generator.provider_name(),
            "application context ready"
        );

        Ok(Self {
            config,
            store,
            generator,
        })
    }
}

/// Load from an explicit file when given, otherwise the project-local hierarchy.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Opens the configured session store, migrating SQLite if needed.
pub async fn open_store(storage: &StorageConfig, score: SimulatedScore) -> Result<Arc<dyn SessionStore>> {
    match storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemorySessionStore::with_score(score))),
        StorageBackend::Sqlite => {
            let url = database_url(&storage.path);
            let pool = initialize_database(&url, PoolConfig::from(storage))
                .await
                .with_context(|| format!("Failed to open database at {}", storage.path))?;
            Ok(Arc::new(SqliteSessionStore::with_score(pool, score)))
        }
    }
}

//! SQLite persistence for interview sessions.

pub mod connection;
pub mod migrations;
pub mod session_store;

pub use connection::{create_memory_pool, create_pool, database_url, ConnectionError, PoolConfig};
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
pub use session_store::SqliteSessionStore;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// Parse a UUID string from a SQLite row field.
pub fn parse_uuid(s: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Fixed-width RFC3339 so stored timestamps sort lexically.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse an RFC3339 datetime string from a SQLite row field.
pub fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::SerializationError(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a nullable RFC3339 column.
pub fn parse_optional_datetime(s: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    s.as_deref().map(parse_datetime).transpose()
}

/// Errors opening and migrating a database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Pool creation failed.
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    /// Schema migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
}

/// Opens (creating if needed) the database at `database_url` and brings its schema up to date.
pub async fn initialize_database(database_url: &str, config: PoolConfig) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(database_url, config).await?;
    Migrator::new(pool.clone()).run(all_embedded_migrations()).await?;
    Ok(pool)
}

/// In-memory pool with all migrations applied.
pub async fn create_migrated_memory_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_memory_pool().await?;
    Migrator::new(pool.clone()).run(all_embedded_migrations()).await?;
    Ok(pool)
}

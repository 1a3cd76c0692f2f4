//! Common test utilities for integration tests

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use mock_interview::adapters::generators::ScriptedGenerator;
use mock_interview::adapters::memory::InMemorySessionStore;
use mock_interview::domain::models::InterviewSettings;
use mock_interview::services::ResilientGenerator;

/// Create a temporary directory for test isolation
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Path to a `SQLite` database file in a fresh temporary directory
#[allow(dead_code)]
pub fn temp_db_path() -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let db_path = dir.path().join("interviews.db");
    (dir, db_path)
}

/// Initializes a tracing subscriber that writes through the test harness.
#[allow(dead_code)]
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[allow(dead_code)]
pub fn memory_store() -> Arc<InMemorySessionStore> {
    Arc::new(InMemorySessionStore::new())
}

#[allow(dead_code)]
pub fn resilient(generator: ScriptedGenerator) -> ResilientGenerator {
    ResilientGenerator::new(Arc::new(generator), Duration::from_secs(30))
}

/// Default settings with a custom question count
#[allow(dead_code)]
pub fn settings(question_count: usize) -> InterviewSettings {
    InterviewSettings {
        question_count,
        ..InterviewSettings::default()
    }
}

//! Mock Interview - practice interview engine
//!
//! A candidate picks a category, answers generated questions one at a time
//! against a per-question countdown, gets feedback on each answer, and can
//! review completed attempts later.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors, and the `SessionStore` /
//!   `InterviewGenerator` ports
//! - **Adapters** (`adapters`): in-memory and `SQLite` stores, Gemini and
//!   scripted generators
//! - **Service Layer** (`services`): lifecycle controller, countdown,
//!   fallback-aware generator, history
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mock_interview::adapters::generators::ScriptedGenerator;
//! use mock_interview::adapters::memory::InMemorySessionStore;
//! use mock_interview::domain::models::{CandidateProfile, InterviewCategory, InterviewSettings};
//! use mock_interview::services::{InterviewController, ResilientGenerator};
//!
//! # async fn demo() -> mock_interview::DomainResult<()> {
//! let settings = InterviewSettings::default();
//! let generator = ResilientGenerator::from_settings(Arc::new(ScriptedGenerator::new()), &settings);
//! let mut interview = InterviewController::start(
//!     Arc::new(InMemorySessionStore::new()),
//!     generator,
//!     &settings,
//!     InterviewCategory::Behavioral,
//!     "anonymous",
//!     CandidateProfile::default(),
//! )
//! .await?;
//!
//! let feedback = interview.submit("I led the migration to a new billing system.").await?;
//! println!("{feedback}");
//! interview.advance().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    CandidateProfile, CompletedInterview, Config, InterviewCategory, InterviewSession,
    InterviewStatus, LifecycleState, QuestionResponse,
};
pub use domain::ports::{InterviewGenerator, SessionStore};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{HistoryService, InterviewController, ResilientGenerator};

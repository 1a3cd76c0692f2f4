//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that adapters must implement:
//! - SessionStore: storage of interview session records
//! - InterviewGenerator: question and feedback generation
//!
//! These traits let the domain and services stay independent of any
//! specific storage engine or text-generation provider.

pub mod interview_generator;
pub mod session_store;

pub use interview_generator::InterviewGenerator;
pub use session_store::SessionStore;

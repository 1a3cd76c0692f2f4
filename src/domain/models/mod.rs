//! Domain models for the mock interview engine.

pub mod candidate;
pub mod config;
pub mod generation;
pub mod interview;
pub mod lifecycle;
pub mod score;

pub use candidate::CandidateProfile;
pub use config::{
    Config, GeneratorConfig, GeneratorProvider, InterviewSettings, LogFormat, LoggingConfig,
    RotationPolicy, StorageBackend, StorageConfig,
};
pub use generation::{FeedbackRequest, QuestionRequest};
pub use interview::{
    duration_label, relative_date_label, CompletedInterview, InterviewCategory, InterviewSession,
    InterviewStatus, QuestionResponse, ANONYMOUS_OWNER,
};
pub use lifecycle::LifecycleState;
pub use score::SimulatedScore;

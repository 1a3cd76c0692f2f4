//! Generator port - interface for question and feedback backends.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{FeedbackRequest, QuestionRequest};

/// Trait for question/feedback generator implementations.
///
/// A generator is an external text service. Calls may be slow or fail;
/// callers inside the engine go through `ResilientGenerator`, which turns
/// failures into fallback content.
#[async_trait]
pub trait InterviewGenerator: Send + Sync {
    /// Get the generator type name.
    fn name(&self) -> &'static str;

    /// Produce an ordered list of interview questions.
    async fn generate_questions(&self, request: &QuestionRequest) -> DomainResult<Vec<String>>;

    /// Produce feedback text for one answer.
    async fn generate_feedback(&self, request: &FeedbackRequest) -> DomainResult<String>;
}

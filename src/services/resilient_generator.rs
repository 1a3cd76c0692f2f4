//! Generator wrapper that never fails.
//!
//! Provider errors, timeouts, and empty output are replaced with static
//! fallback content so the interview can always continue.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::models::{
    CandidateProfile, FeedbackRequest, InterviewCategory, InterviewSettings, QuestionRequest,
};
use crate::domain::ports::InterviewGenerator;

/// Questions used when the provider cannot supply any.
pub const FALLBACK_QUESTIONS: [&str; 5] = [
    "Tell me about yourself and your background.",
    "What are your greatest strengths and weaknesses?",
    "Describe a challenging situation you faced at work and how you handled it.",
    "Why are you interested in this position?",
    "Where do you see yourself in 5 years?",
];

/// Feedback used when the provider cannot supply any.
pub const FALLBACK_FEEDBACK: &str = "Thank you for your response. It addressed the key points of the question. \
For future interviews, consider providing more specific examples to strengthen your answer. \
Overall, good communication skills demonstrated.";

/// The static question set, cycled or truncated to `count`.
pub fn fallback_questions(count: usize) -> Vec<String> {
    FALLBACK_QUESTIONS
        .iter()
        .cycle()
        .take(count)
        .map(|q| (*q).to_string())
        .collect()
}

/// Generator wrapper that never fails: errors and timeouts become fallback content.
#[derive(Clone)]
pub struct ResilientGenerator {
    inner: Arc<dyn InterviewGenerator>,
    timeout: Duration,
}

impl ResilientGenerator {
    /// Wraps `inner`, giving each call at most `timeout`.
    pub fn new(inner: Arc<dyn InterviewGenerator>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Wraps `inner` with the configured timeout.
    pub fn from_settings(inner: Arc<dyn InterviewGenerator>, settings: &InterviewSettings) -> Self {
        Self::new(inner, Duration::from_secs(settings.generator_timeout_secs))
    }

    /// Name of the wrapped generator.
    pub fn provider_name(&self) -> &'static str {
        self.inner.name()
    }

    /// Up to `count` questions from the provider, or the fallback set.
    pub async fn questions(
        &self,
        category: InterviewCategory,
        profile: &CandidateProfile,
        count: usize,
    ) -> Vec<String> {
        let request = QuestionRequest::new(category, profile, count);
        let provider = self.inner.name();

        match timeout(self.timeout, self.inner.generate_questions(&request)).await {
            Ok(Ok(mut questions)) if !questions.is_empty() => {
                questions.truncate(count);
                debug!(provider, count = questions.len(), "questions generated");
                questions
            }
            Ok(Ok(_)) => {
                warn!(provider, "generator returned no questions, using fallback set");
                fallback_questions(count)
            }
            Ok(Err(e)) => {
                warn!(provider, error = %e, "question generation failed, using fallback set");
                fallback_questions(count)
            }
            Err(_) => {
                warn!(
                    provider,
                    timeout_secs = self.timeout.as_secs(),
                    "question generation timed out, using fallback set"
                );
                fallback_questions(count)
            }
        }
    }

    /// Provider feedback for one answer, or the fallback text.
    pub async fn feedback(
        &self,
        question: &str,
        answer: &str,
        profile: &CandidateProfile,
    ) -> String {
        let request = FeedbackRequest::new(question, answer, profile);
        let provider = self.inner.name();

        match timeout(self.timeout, self.inner.generate_feedback(&request)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(Ok(_)) => {
                warn!(provider, "generator returned blank feedback, using fallback");
                FALLBACK_FEEDBACK.to_string()
            }
            Ok(Err(e)) => {
                warn!(provider, error = %e, "feedback generation failed, using fallback");
                FALLBACK_FEEDBACK.to_string()
            }
            Err(_) => {
                warn!(
                    provider,
                    timeout_secs = self.timeout.as_secs(),
                    "feedback generation timed out, using fallback"
                );
                FALLBACK_FEEDBACK.to_string()
            }
        }
    }
}

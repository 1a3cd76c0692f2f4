//! Offline generator with canned content.
//!
//! Used as the default provider when no API key is configured and as the
//! test double for the controller.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FeedbackRequest, InterviewCategory, QuestionRequest};
use crate::domain::ports::InterviewGenerator;

/// How a scripted generator answers a call.
#[derive(Debug, Clone)]
pub enum ScriptedBehavior {
    /// Return canned content
    Respond,
    /// Fail every call
    Fail(String),
    /// Sleep before responding; used to exercise timeouts
    Delay(Duration),
}

/// Offline generator with canned content, also used as a test double.
pub struct ScriptedGenerator {
    questions: Option<Vec<String>>,
    feedback: Option<String>,
    behavior: ScriptedBehavior,
    question_calls: AtomicUsize,
    feedback_calls: AtomicUsize,
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedGenerator {
    /// Canned questions and feedback, answering immediately.
    pub fn new() -> Self {
        Self {
            questions: None,
            feedback: None,
            behavior: ScriptedBehavior::Respond,
            question_calls: AtomicUsize::new(0),
            feedback_calls: AtomicUsize::new(0),
        }
    }

    /// Always return exactly these questions
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = Some(questions.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the generated feedback with a fixed string.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Generator whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: ScriptedBehavior::Fail(message.into()),
            ..Self::new()
        }
    }

    /// Generator that sleeps for `delay` before answering.
    pub fn delayed(delay: Duration) -> Self {
        Self {
            behavior: ScriptedBehavior::Delay(delay),
            ..Self::new()
        }
    }

    /// Number of `generate_questions` calls so far.
    pub fn question_calls(&self) -> usize {
        self.question_calls.load(Ordering::SeqCst)
    }

    /// Number of `generate_feedback` calls so far.
    pub fn feedback_calls(&self) -> usize {
        self.feedback_calls.load(Ordering::SeqCst)
    }

    async fn behave(&self) -> DomainResult<()> {
        match &self.behavior {
            ScriptedBehavior::Respond => Ok(()),
            ScriptedBehavior::Fail(message) => Err(DomainError::GeneratorFailed(message.clone())),
            ScriptedBehavior::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(())
            }
        }
    }

    fn canned_questions(request: &QuestionRequest) -> Vec<String> {
        let bank: &[&str] = match request.category {
            InterviewCategory::Technical => &[
                "Walk me through how you would design a URL shortening service.",
                "How do you decide between a relational and a document database?",
                "Describe how you track down a memory leak in a long-running service.",
                "What trade-offs do you weigh when introducing a cache?",
                "How do you keep a large codebase testable as it grows?",
            ],
            InterviewCategory::Behavioral => &[
                "Tell me about a time you disagreed with a teammate and how it was resolved.",
                "Describe a project that failed and what you learned from it.",
                "How do you prioritize when everything seems urgent?",
                "Tell me about feedback that changed how you work.",
                "Describe a time you had to learn something quickly to deliver.",
            ],
            InterviewCategory::Industry => &[
                "What trends are shaping the {industry} industry right now?",
                "How would you explain the value of your role to a {industry} customer?",
                "Which regulations or standards matter most in {industry}, and why?",
                "Who are the key competitors in {industry} and what sets them apart?",
                "Where do you see the biggest opportunity for a {job_title} in {industry}?",
            ],
        };

        bank.iter()
            .cycle()
            .take(request.count)
            .map(|q| q.replace("{industry}", &request.industry).replace("{job_title}", &request.job_title))
            .collect()
    }
}

#[async_trait]
impl InterviewGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_questions(&self, request: &QuestionRequest) -> DomainResult<Vec<String>> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        self.behave().await?;
        Ok(self
            .questions
            .clone()
            .unwrap_or_else(|| Self::canned_questions(request)))
    }

    async fn generate_feedback(&self, request: &FeedbackRequest) -> DomainResult<String> {
        self.feedback_calls.fetch_add(1, Ordering::SeqCst);
        self.behave().await?;
        Ok(self.feedback.clone().unwrap_or_else(|| {
            let words = request.answer.split_whitespace().count();
            format!(
                "Your {words}-word answer stays on topic. For a {} role, anchor the main point in one concrete example and close with the outcome.",
                request.job_title
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CandidateProfile;

    #[tokio::test]
    async fn test_canned_questions_match_count() {
        let generator = ScriptedGenerator::new();
        let profile = CandidateProfile::new("Analyst", "junior", "healthcare");
        let request = QuestionRequest::new(InterviewCategory::Industry, &profile, 7);

        let questions = generator.generate_questions(&request).await.unwrap();
        assert_eq!(questions.len(), 7);
        assert!(questions[0].contains("healthcare"));
        assert!(questions.iter().all(|q| !q.contains('{')));
        assert_eq!(generator.question_calls(), 1);
    }

    #[tokio::test]
    async fn test_fixed_content() {
        let generator = ScriptedGenerator::new().with_questions(["A?", "B?"]).with_feedback("Nice.");
        let profile = CandidateProfile::default();

        let questions = generator
            .generate_questions(&QuestionRequest::new(InterviewCategory::Technical, &profile, 5))
            .await
            .unwrap();
        assert_eq!(questions, vec!["A?", "B?"]);

        let feedback = generator
            .generate_feedback(&FeedbackRequest::new("A?", "yes", &profile))
            .await
            .unwrap();
        assert_eq!(feedback, "Nice.");
    }

    #[tokio::test]
    async fn test_failing_counts_calls() {
        let generator = ScriptedGenerator::failing("offline");
        let profile = CandidateProfile::default();

        let result = generator
            .generate_feedback(&FeedbackRequest::new("q", "a", &profile))
            .await;
        assert!(matches!(result, Err(DomainError::GeneratorFailed(m)) if m == "offline"));
        assert_eq!(generator.feedback_calls(), 1);
    }
}

//! Session lifecycle controller.
//!
//! Drives one interview from the first question to completion:
//!
//! ```text
//! AwaitingAnswer(i) --submit--> ReviewingFeedback(i) --advance--> Advancing
//!        ^                                                          |
//!        +---------------- i + 1 < question count -----------------+
//!                                                                   |
//!                                    Finished <--- last question ---+
//! ```
//!
//! Events take `&mut self`, so a second event cannot start while the first
//! is still awaiting the generator or the store.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::countdown::Countdown;
use super::resilient_generator::ResilientGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    CandidateProfile, InterviewCategory, InterviewSettings, InterviewStatus, LifecycleState,
};
use crate::domain::ports::SessionStore;

/// Answer and feedback for the question currently under review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResponse {
    /// Answer as submitted
    pub answer: String,
    /// Feedback shown for it
    pub feedback: String,
}

/// Drives one interview through its lifecycle.
///
/// Holds the questions and the running countdown for one session. Every
/// persisted change goes through the session store.
pub struct InterviewController {
    store: Arc<dyn SessionStore>,
    generator: ResilientGenerator,
    profile: CandidateProfile,
    session_id: Uuid,
    category: InterviewCategory,
    questions: Vec<String>,
    state: LifecycleState,
    pending: Option<PendingResponse>,
    countdown: Countdown,
}

impl InterviewController {
    /// Creates a session record, fetches its questions, and arms the countdown
    /// for the first one.
    #[instrument(skip(store, generator, settings, profile), err)]
    pub async fn start(
        store: Arc<dyn SessionStore>,
        generator: ResilientGenerator,
        settings: &InterviewSettings,
        category: InterviewCategory,
        owner_id: &str,
        profile: CandidateProfile,
    ) -> DomainResult<Self> {
        let session_id = store.create(category, owner_id).await?;
        let questions = generator
            .questions(category, &profile, settings.question_count)
            .await;

        let mut controller = Self::assemble(
            store,
            generator,
            settings,
            profile,
            session_id,
            category,
            questions,
        )?;
        controller.countdown.arm();

        info!(
            session_id = %session_id,
            provider = controller.generator.provider_name(),
            questions = controller.questions.len(),
            "interview started"
        );
        Ok(controller)
    }

    /// Re-attaches to an in-progress session at its first unanswered question.
    ///
    /// Returns `None` when the session does not exist or is already completed.
    /// When every question already has an answer, the controller resumes on
    /// the last answer's feedback so the caller can advance to completion.
    #[instrument(skip(store, generator, settings, profile), err)]
    pub async fn resume(
        store: Arc<dyn SessionStore>,
        generator: ResilientGenerator,
        settings: &InterviewSettings,
        session_id: Uuid,
        profile: CandidateProfile,
    ) -> DomainResult<Option<Self>> {
        let Some(session) = store.get_by_id(session_id).await? else {
            return Ok(None);
        };
        if session.is_completed() {
            return Ok(None);
        }

        let questions = generator
            .questions(session.category, &profile, settings.question_count)
            .await;

        let mut controller = Self::assemble(
            store,
            generator,
            settings,
            profile,
            session_id,
            session.category,
            questions,
        )?;

        match session.first_unanswered(controller.questions.len()) {
            Some(index) => {
                controller.state = LifecycleState::AwaitingAnswer(index);
                controller.countdown.arm();
            }
            None => {
                let last = controller.questions.len() - 1;
                controller.pending = session.response(last).map(|r| PendingResponse {
                    answer: r.answer.clone(),
                    feedback: r.feedback.clone(),
                });
                controller.state = LifecycleState::ReviewingFeedback(last);
            }
        }

        info!(session_id = %session_id, state = %controller.state, "interview resumed");
        Ok(Some(controller))
    }

    fn assemble(
        store: Arc<dyn SessionStore>,
        generator: ResilientGenerator,
        settings: &InterviewSettings,
        profile: CandidateProfile,
        session_id: Uuid,
        category: InterviewCategory,
        questions: Vec<String>,
    ) -> DomainResult<Self> {
        if questions.is_empty() {
            return Err(DomainError::ValidationFailed(
                "an interview needs at least one question".to_string(),
            ));
        }

        Ok(Self {
            store,
            generator,
            profile,
            session_id,
            category,
            questions,
            state: LifecycleState::AwaitingAnswer(0),
            pending: None,
            countdown: Countdown::new(
                settings.countdown_secs,
                Duration::from_millis(settings.tick_millis),
            ),
        })
    }

    /// Submits an answer to the current question and returns the feedback.
    ///
    /// Generator trouble never fails a submit; fallback feedback is used instead.
    ///
    /// # Errors
    /// `EmptyResponse` for blank answers and `InvalidAction` outside
    /// `AwaitingAnswer`. Neither changes state.
    pub async fn submit(&mut self, answer: &str) -> DomainResult<&str> {
        let LifecycleState::AwaitingAnswer(index) = self.state else {
            return Err(self.invalid_action("submit an answer"));
        };
        if answer.trim().is_empty() {
            return Err(DomainError::EmptyResponse);
        }

        self.countdown.stop();
        let feedback = self
            .generator
            .feedback(&self.questions[index], answer, &self.profile)
            .await;

        // Saved again on advance, so a failure here only delays persistence.
        if let Err(e) = self
            .store
            .save_response(self.session_id, index, answer, &feedback)
            .await
        {
            warn!(question_index = index, error = %e, "could not save response on submit");
        }

        self.state = LifecycleState::ReviewingFeedback(index);
        let pending = self.pending.insert(PendingResponse {
            answer: answer.to_string(),
            feedback,
        });
        Ok(pending.feedback.as_str())
    }

    /// Moves past the feedback to the next question, or completes the session
    /// after the last one.
    ///
    /// # Errors
    /// `InvalidAction` outside `ReviewingFeedback`. A store failure is returned
    /// with the controller back in `ReviewingFeedback` so the caller may retry.
    #[instrument(skip(self), fields(session_id = %self.session_id), err)]
    pub async fn advance(&mut self) -> DomainResult<LifecycleState> {
        let LifecycleState::ReviewingFeedback(index) = self.state else {
            return Err(self.invalid_action("advance"));
        };

        self.state = LifecycleState::Advancing;
        match self.persist_and_move(index).await {
            Ok(next) => {
                self.state = next;
                Ok(next)
            }
            Err(e) => {
                self.state = LifecycleState::ReviewingFeedback(index);
                Err(e)
            }
        }
    }

    async fn persist_and_move(&mut self, index: usize) -> DomainResult<LifecycleState> {
        if let Some(pending) = &self.pending {
            self.store
                .save_response(self.session_id, index, &pending.answer, &pending.feedback)
                .await?;
        }

        if index + 1 >= self.questions.len() {
            self.store
                .set_status(self.session_id, InterviewStatus::Completed)
                .await?;
            self.countdown.stop();
            self.pending = None;
            info!(session_id = %self.session_id, "interview completed");
            return Ok(LifecycleState::Finished);
        }

        self.pending = None;
        self.countdown.arm();
        Ok(LifecycleState::AwaitingAnswer(index + 1))
    }

    /// Leaves the interview. The record stays in progress and can be resumed.
    pub fn abandon(mut self) -> Uuid {
        self.countdown.stop();
        info!(session_id = %self.session_id, state = %self.state, "interview abandoned");
        self.session_id
    }

    fn invalid_action(&self, action: &str) -> DomainError {
        DomainError::InvalidAction {
            action: action.to_string(),
            state: self.state.to_string(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Id of the session being driven.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Category chosen at start.
    pub fn category(&self) -> InterviewCategory {
        self.category
    }

    /// Questions for this session, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Number of questions in this session.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Question text for the current state, if it refers to one
    pub fn current_question(&self) -> Option<&str> {
        self.state
            .question_index()
            .and_then(|i| self.questions.get(i))
            .map(String::as_str)
    }

    /// Answer and feedback under review
    pub fn pending(&self) -> Option<&PendingResponse> {
        self.pending.as_ref()
    }

    /// Countdown for the current question.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::generators::ScriptedGenerator;
    use crate::adapters::memory::InMemorySessionStore;

    fn generator(inner: ScriptedGenerator) -> ResilientGenerator {
        ResilientGenerator::new(Arc::new(inner), Duration::from_secs(30))
    }

    fn settings(question_count: usize) -> InterviewSettings {
        InterviewSettings {
            question_count,
            ..InterviewSettings::default()
        }
    }

    async fn started(question_count: usize) -> (Arc<InMemorySessionStore>, InterviewController) {
        let store = Arc::new(InMemorySessionStore::new());
        let controller = InterviewController::start(
            store.clone(),
            generator(ScriptedGenerator::new().with_feedback("Solid.")),
            &settings(question_count),
            InterviewCategory::Technical,
            "alice",
            CandidateProfile::default(),
        )
        .await
        .unwrap();
        (store, controller)
    }

    #[tokio::test]
    async fn test_start_awaits_first_answer() {
        let (store, controller) = started(5).await;
        assert_eq!(controller.state(), LifecycleState::AwaitingAnswer(0));
        assert_eq!(controller.question_count(), 5);
        assert!(controller.current_question().is_some());
        assert!(controller.countdown().is_running());

        let session = store.get_by_id(controller.session_id()).await.unwrap().unwrap();
        assert_eq!(session.status, InterviewStatus::InProgress);
    }

    #[tokio::test]
    async fn test_blank_answer_rejected_without_change() {
        let (_store, mut controller) = started(5).await;
        let result = controller.submit("  \n\t ").await;
        assert!(matches!(result, Err(DomainError::EmptyResponse)));
        assert_eq!(controller.state(), LifecycleState::AwaitingAnswer(0));
        assert!(controller.countdown().is_running());
    }

    #[tokio::test]
    async fn test_events_in_wrong_state() {
        let (_store, mut controller) = started(2).await;
        assert!(matches!(controller.advance().await, Err(DomainError::InvalidAction { .. })));

        controller.submit("answer").await.unwrap();
        assert!(matches!(controller.submit("again").await, Err(DomainError::InvalidAction { .. })));
        assert_eq!(controller.state(), LifecycleState::ReviewingFeedback(0));
    }

    #[tokio::test]
    async fn test_single_question_completes() {
        let (store, mut controller) = started(1).await;
        assert_eq!(controller.submit("only answer").await.unwrap(), "Solid.");
        assert_eq!(controller.advance().await.unwrap(), LifecycleState::Finished);
        assert!(!controller.countdown().is_running());

        let session = store.get_by_id(controller.session_id()).await.unwrap().unwrap();
        assert!(session.is_completed());
        assert_eq!(session.response(0).unwrap().answer, "only answer");
    }

    #[tokio::test]
    async fn test_abandon_leaves_session_in_progress() {
        let (store, mut controller) = started(3).await;
        controller.submit("first").await.unwrap();
        let id = controller.abandon();

        let session = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(session.status, InterviewStatus::InProgress);
        assert_eq!(session.responses.len(), 1);
    }
}

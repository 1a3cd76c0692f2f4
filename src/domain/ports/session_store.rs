//! Session store port (trait) for dependency injection.
//!
//! Defines the contract for interview session storage that adapters must
//! implement. The lifecycle controller depends on this trait, not on a
//! concrete store.
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    CompletedInterview, InterviewCategory, InterviewSession, InterviewStatus,
};

/// Store trait for interview session records
///
/// Implementations must make every mutation visible to the next read and
/// keep each mutation atomic with respect to concurrent callers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a new in-progress session and returns its identifier
    ///
    /// # Errors
    /// Returns error only if the backing storage fails
    async fn create(&self, category: InterviewCategory, owner_id: &str) -> DomainResult<Uuid>;

    /// Retrieves a snapshot of a session
    ///
    /// # Returns
    /// - `Some(InterviewSession)` if found
    /// - `None` if not found
    async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<InterviewSession>>;

    /// Transitions a session's status
    ///
    /// Completing stamps `completed_at` and a simulated score once; repeating
    /// the completion changes nothing. Unknown ids are a no-op.
    ///
    /// # Errors
    /// Returns error if:
    /// - A completed session is asked to return to in-progress
    /// - The backing storage fails
    async fn set_status(&self, id: Uuid, status: InterviewStatus) -> DomainResult<()>;

    /// Inserts or replaces the response at `question_index`
    ///
    /// Unknown ids are a no-op.
    async fn save_response(
        &self,
        id: Uuid,
        question_index: usize,
        answer: &str,
        feedback: &str,
    ) -> DomainResult<()>;

    /// Completed sessions owned by `owner_id`, oldest first
    async fn completed_by_owner(&self, owner_id: &str) -> DomainResult<Vec<InterviewSession>>;

    /// Completed sessions owned by `owner_id`, labelled for display
    async fn list_completed(&self, owner_id: &str) -> DomainResult<Vec<CompletedInterview>> {
        let now = Utc::now();
        Ok(self
            .completed_by_owner(owner_id)
            .await?
            .into_iter()
            .map(|session| CompletedInterview::annotate(session, now))
            .collect())
    }
}

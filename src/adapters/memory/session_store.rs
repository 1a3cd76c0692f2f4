//! Volatile in-process session store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{InterviewCategory, InterviewSession, InterviewStatus, SimulatedScore};
use crate::domain::ports::SessionStore;

#[derive(Default)]
struct Records {
    sessions: HashMap<Uuid, InterviewSession>,
    /// Identifiers in creation order
    order: Vec<Uuid>,
}

/// Session store that lives for the lifetime of the process.
///
/// Records are never deleted; everything is lost when the process exits.
#[derive(Default)]
pub struct InMemorySessionStore {
    records: RwLock<Records>,
    score: SimulatedScore,
}

impl InMemorySessionStore {
    /// Empty store using the default score range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store drawing completion scores from `score`.
    pub fn with_score(score: SimulatedScore) -> Self {
        Self {
            records: RwLock::default(),
            score,
        }
    }

    /// Number of sessions ever created
    pub async fn len(&self) -> usize {
        self.records.read().await.order.len()
    }

    /// True when no session has been created.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    #[instrument(skip(self))]
    async fn create(&self, category: InterviewCategory, owner_id: &str) -> DomainResult<Uuid> {
        let mut records = self.records.write().await;

        let mut session = InterviewSession::new(category, owner_id);
        while records.sessions.contains_key(&session.id) {
            session.id = Uuid::new_v4();
        }

        let id = session.id;
        records.order.push(id);
        records.sessions.insert(id, session);
        debug!(session_id = %id, "interview session created");
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<InterviewSession>> {
        let records = self.records.read().await;
        Ok(records.sessions.get(&id).cloned())
    }

    #[instrument(skip(self), err)]
    async fn set_status(&self, id: Uuid, status: InterviewStatus) -> DomainResult<()> {
        let mut records = self.records.write().await;
        let Some(session) = records.sessions.get_mut(&id) else {
            warn!(session_id = %id, "status change for unknown session ignored");
            return Ok(());
        };

        if session.apply_status(status, || self.score.draw())? {
            debug!(session_id = %id, status = %status, score = ?session.score, "session status changed");
        }
        Ok(())
    }

    #[instrument(skip(self, answer, feedback))]
    async fn save_response(
        &self,
        id: Uuid,
        question_index: usize,
        answer: &str,
        feedback: &str,
    ) -> DomainResult<()> {
        let mut records = self.records.write().await;
        match records.sessions.get_mut(&id) {
            Some(session) => session.upsert_response(question_index, answer, feedback),
            None => warn!(session_id = %id, "response for unknown session ignored"),
        }
        Ok(())
    }

    async fn completed_by_owner(&self, owner_id: &str) -> DomainResult<Vec<InterviewSession>> {
        let records = self.records.read().await;
        let mut completed: Vec<InterviewSession> = records
            .order
            .iter()
            .filter_map(|id| records.sessions.get(id))
            .filter(|s| s.is_completed() && s.owner_id == owner_id)
            .cloned()
            .collect();
        completed.sort_by_key(|s| s.started_at);
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemorySessionStore::new();
        let id = store.create(InterviewCategory::Technical, "alice").await.unwrap();

        let session = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.status, InterviewStatus::InProgress);
        assert!(session.completed_at.is_none());
        assert!(session.score.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_ids_are_noops() {
        let store = InMemorySessionStore::new();
        let ghost = Uuid::new_v4();

        store.set_status(ghost, InterviewStatus::Completed).await.unwrap();
        store.save_response(ghost, 0, "answer", "feedback").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_completion_is_stamped_once() {
        let store = InMemorySessionStore::new();
        let id = store.create(InterviewCategory::Behavioral, "alice").await.unwrap();

        store.set_status(id, InterviewStatus::Completed).await.unwrap();
        let first = store.get_by_id(id).await.unwrap().unwrap();

        store.set_status(id, InterviewStatus::Completed).await.unwrap();
        let second = store.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(first.completed_at, second.completed_at);
        assert_eq!(first.score, second.score);
        assert!((80..=100).contains(&second.score.unwrap()));
    }

    #[tokio::test]
    async fn test_reopen_is_rejected() {
        let store = InMemorySessionStore::with_score(SimulatedScore::fixed(90).unwrap());
        let id = store.create(InterviewCategory::Technical, "alice").await.unwrap();
        store.set_status(id, InterviewStatus::Completed).await.unwrap();

        let result = store.set_status(id, InterviewStatus::InProgress).await;
        assert!(matches!(result, Err(DomainError::InvalidStateTransition { .. })));

        let session = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(session.status, InterviewStatus::Completed);
        assert_eq!(session.score, Some(90));
    }

    #[tokio::test]
    async fn test_completed_filtered_by_owner() {
        let store = InMemorySessionStore::new();
        let a1 = store.create(InterviewCategory::Technical, "alice").await.unwrap();
        let a2 = store.create(InterviewCategory::Industry, "alice").await.unwrap();
        let b1 = store.create(InterviewCategory::Technical, "bob").await.unwrap();

        store.set_status(a1, InterviewStatus::Completed).await.unwrap();
        store.set_status(b1, InterviewStatus::Completed).await.unwrap();

        let completed = store.completed_by_owner("alice").await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, a1);
        assert!(completed.iter().all(|s| s.id != a2));

        let listed = store.list_completed("alice").await.unwrap();
        assert_eq!(listed[0].date_label, "Today");
        assert_eq!(listed[0].duration_label, "0 min");
    }
}

//! SQLite implementation of the SessionStore.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{format_datetime, parse_datetime, parse_optional_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    InterviewCategory, InterviewSession, InterviewStatus, QuestionResponse, SimulatedScore,
};
use crate::domain::ports::SessionStore;

const SESSION_COLUMNS: &str = "id, category, status, owner_id, started_at, completed_at, score";

/// Durable session store backed by `SQLite`.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
    score: SimulatedScore,
}

impl SqliteSessionStore {
    /// Store over `pool` using the default score range.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            score: SimulatedScore::default(),
        }
    }

    /// Store over `pool` drawing completion scores from `score`.
    pub fn with_score(pool: SqlitePool, score: SimulatedScore) -> Self {
        Self { pool, score }
    }

    async fn load_responses(&self, id: Uuid) -> DomainResult<BTreeMap<usize, QuestionResponse>> {
        let rows: Vec<ResponseRow> = sqlx::query_as(
            "SELECT question_index, answer, feedback, answered_at FROM interview_responses WHERE session_id = ? ORDER BY question_index",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let response = QuestionResponse::try_from(row)?;
                Ok((response.question_index, response))
            })
            .collect()
    }

    async fn hydrate(&self, row: SessionRow) -> DomainResult<InterviewSession> {
        let mut session = InterviewSession::try_from(row)?;
        session.responses = self.load_responses(session.id).await?;
        Ok(session)
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    #[instrument(skip(self), err)]
    async fn create(&self, category: InterviewCategory, owner_id: &str) -> DomainResult<Uuid> {
        let session = InterviewSession::new(category, owner_id);

        sqlx::query(
            "INSERT INTO interview_sessions (id, category, status, owner_id, started_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(session.id.to_string())
        .bind(session.category.as_str())
        .bind(session.status.as_str())
        .bind(&session.owner_id)
        .bind(format_datetime(session.started_at))
        .execute(&self.pool)
        .await?;

        debug!(session_id = %session.id, "interview session created");
        Ok(session.id)
    }

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<InterviewSession>> {
        let row: Option<SessionRow> =
            sqlx::query_as(&format!("SELECT {SESSION_COLUMNS} FROM interview_sessions WHERE id = ?"))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self), err)]
    async fn set_status(&self, id: Uuid, status: InterviewStatus) -> DomainResult<()> {
        let Some(mut session) = self.get_by_id(id).await? else {
            warn!(session_id = %id, "status change for unknown session ignored");
            return Ok(());
        };

        if !session.apply_status(status, || self.score.draw())? {
            return Ok(());
        }

        // Guarded on the old status so a racing completion cannot restamp.
        let result = sqlx::query(
            "UPDATE interview_sessions SET status = ?, completed_at = ?, score = ? WHERE id = ? AND status = 'in-progress'",
        )
        .bind(session.status.as_str())
        .bind(session.completed_at.map(format_datetime))
        .bind(session.score.map(i64::from))
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            debug!(session_id = %id, status = %status, score = ?session.score, "session status changed");
        }
        Ok(())
    }

    #[instrument(skip(self, answer, feedback), err)]
    async fn save_response(
        &self,
        id: Uuid,
        question_index: usize,
        answer: &str,
        feedback: &str,
    ) -> DomainResult<()> {
        let index = i64::try_from(question_index)
            .map_err(|_| DomainError::ValidationFailed(format!("question index {question_index} out of range")))?;

        let result = sqlx::query(
            r"INSERT INTO interview_responses (session_id, question_index, answer, feedback, answered_at)
               SELECT id, ?, ?, ?, ? FROM interview_sessions WHERE id = ?
               ON CONFLICT (session_id, question_index)
               DO UPDATE SET answer = excluded.answer, feedback = excluded.feedback, answered_at = excluded.answered_at",
        )
        .bind(index)
        .bind(answer)
        .bind(feedback)
        .bind(format_datetime(Utc::now()))
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            warn!(session_id = %id, "response for unknown session ignored");
        }
        Ok(())
    }

    async fn completed_by_owner(&self, owner_id: &str) -> DomainResult<Vec<InterviewSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(&format!(
            "SELECT {SESSION_COLUMNS} FROM interview_sessions WHERE owner_id = ? AND status = 'completed' ORDER BY started_at"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in rows {
            sessions.push(self.hydrate(row).await?);
        }
        Ok(sessions)
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    category: String,
    status: String,
    owner_id: String,
    started_at: String,
    completed_at: Option<String>,
    score: Option<i64>,
}

impl TryFrom<SessionRow> for InterviewSession {
    type Error = DomainError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let category = InterviewCategory::from_str(&row.category)
            .ok_or_else(|| DomainError::SerializationError(format!("Invalid category: {}", row.category)))?;
        let status = InterviewStatus::from_str(&row.status)
            .ok_or_else(|| DomainError::SerializationError(format!("Invalid status: {}", row.status)))?;
        let score = row
            .score
            .map(u8::try_from)
            .transpose()
            .map_err(|e| DomainError::SerializationError(format!("Invalid score: {e}")))?;

        Ok(Self {
            id: parse_uuid(&row.id)?,
            category,
            status,
            owner_id: row.owner_id,
            started_at: parse_datetime(&row.started_at)?,
            completed_at: parse_optional_datetime(row.completed_at)?,
            score,
            responses: BTreeMap::new(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct ResponseRow {
    question_index: i64,
    answer: String,
    feedback: String,
    answered_at: String,
}

impl TryFrom<ResponseRow> for QuestionResponse {
    type Error = DomainError;

    fn try_from(row: ResponseRow) -> Result<Self, Self::Error> {
        Ok(Self {
            question_index: usize::try_from(row.question_index)
                .map_err(|e| DomainError::SerializationError(format!("Invalid question index: {e}")))?,
            answer: row.answer,
            feedback: row.feedback,
            answered_at: parse_datetime(&row.answered_at)?,
        })
    }
}

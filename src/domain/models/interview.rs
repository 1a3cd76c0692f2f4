//! Domain models for interview sessions.
//!
//! An interview session is one end-to-end attempt at a mock interview, from
//! category selection to completion or abandonment. Responses are addressed
//! by question index so a late or out-of-order answer never shifts others.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// Owner recorded for sessions started without an authenticated user.
pub const ANONYMOUS_OWNER: &str = "anonymous";

/// Interview category chosen when a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewCategory {
    /// Coding problems, system design, technical concepts
    Technical,
    /// Behavioral questions answered with the STAR method
    Behavioral,
    /// Questions specific to the candidate's industry
    Industry,
}

impl InterviewCategory {
    /// All categories in display order
    pub const ALL: [Self; 3] = [Self::Technical, Self::Behavioral, Self::Industry];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Industry => "industry",
        }
    }

    /// Parses a category name; accepts `industry-specific` as an alias.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Some(Self::Technical),
            "behavioral" => Some(Self::Behavioral),
            "industry" | "industry-specific" => Some(Self::Industry),
            _ => None,
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Technical => "Technical Interview",
            Self::Behavioral => "Behavioral Interview",
            Self::Industry => "Industry-Specific",
        }
    }

    /// Category label used inside generator prompts
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Industry => "industry-specific",
        }
    }
}

impl fmt::Display for InterviewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session lifecycle status. Transitions only in-progress -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewStatus {
    /// Started and accepting answers
    InProgress,
    /// Finished; terminal
    Completed,
}

impl InterviewStatus {
    /// Stable stored name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Parses the stored form.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer and feedback captured for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Zero-based position in the question sequence
    pub question_index: usize,

    /// Free-text answer as submitted
    pub answer: String,

    /// Feedback text shown after the answer
    pub feedback: String,

    /// When the answer was last saved
    pub answered_at: DateTime<Utc>,
}

/// One interview attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    /// Unique session identifier
    pub id: Uuid,

    /// Interview category
    pub category: InterviewCategory,

    /// Status when the run ended
    pub status: InterviewStatus,

    /// Opaque identity of the user who owns the session
    pub owner_id: String,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Set exactly once, when the session completes
    pub completed_at: Option<DateTime<Utc>>,

    /// Simulated percentage score, present only once completed
    pub score: Option<u8>,

    /// Sparse responses keyed by question index
    #[serde(default)]
    pub responses: BTreeMap<usize, QuestionResponse>,
}

impl InterviewSession {
    /// Creates a new in-progress session with a fresh UUID
    pub fn new(category: InterviewCategory, owner_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            status: InterviewStatus::InProgress,
            owner_id: owner_id.into(),
            started_at: Utc::now(),
            completed_at: None,
            score: None,
            responses: BTreeMap::new(),
        }
    }

    /// True once the session has completed.
    pub fn is_completed(&self) -> bool {
        self.status == InterviewStatus::Completed
    }

    /// Saved response for `question_index`, if any
    pub fn response(&self, question_index: usize) -> Option<&QuestionResponse> {
        self.responses.get(&question_index)
    }

    /// Inserts or replaces the response at `question_index`
    pub fn upsert_response(
        &mut self,
        question_index: usize,
        answer: impl Into<String>,
        feedback: impl Into<String>,
    ) {
        self.responses.insert(
            question_index,
            QuestionResponse {
                question_index,
                answer: answer.into(),
                feedback: feedback.into(),
                answered_at: Utc::now(),
            },
        );
    }

    /// Applies a status change.
    ///
    /// Completing stamps `completed_at` and draws a score from `score`; a
    /// repeated completion leaves the first stamp and score untouched.
    /// Returns whether the record changed.
    ///
    /// # Errors
    /// Returns `InvalidStateTransition` when asked to reopen a completed session.
    pub fn apply_status(
        &mut self,
        status: InterviewStatus,
        score: impl FnOnce() -> u8,
    ) -> DomainResult<bool> {
        match (self.status, status) {
            (InterviewStatus::InProgress, InterviewStatus::Completed) => {
                self.status = InterviewStatus::Completed;
                self.completed_at = Some(Utc::now());
                self.score = Some(score());
                Ok(true)
            }
            (InterviewStatus::Completed, InterviewStatus::InProgress) => {
                Err(DomainError::InvalidStateTransition {
                    from: self.status.to_string(),
                    to: status.to_string(),
                    reason: "completed sessions cannot be reopened".to_string(),
                })
            }
            _ => Ok(false),
        }
    }

    /// First question index in `0..question_count` without a saved response
    pub fn first_unanswered(&self, question_count: usize) -> Option<usize> {
        (0..question_count).find(|i| !self.responses.contains_key(i))
    }
}

/// A completed session annotated for history display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedInterview {
    /// The underlying record
    #[serde(flatten)]
    pub session: InterviewSession,

    /// Relative start date, e.g. "Today" or "3 days ago"
    pub date_label: String,

    /// Elapsed time from start to completion, e.g. "12 min"
    pub duration_label: String,
}

impl CompletedInterview {
    /// Attaches date and duration labels computed against `now`.
    ///
    /// A session without a completion stamp is measured up to `now`.
    pub fn annotate(session: InterviewSession, now: DateTime<Utc>) -> Self {
        let end = session.completed_at.unwrap_or(now);
        Self {
            date_label: relative_date_label(session.started_at, now),
            duration_label: duration_label(session.started_at, end),
            session,
        }
    }
}

/// Relative label for when something happened: "Today", "Yesterday",
/// "N days ago" for under a week, the calendar date otherwise.
pub fn relative_date_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - at).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => at.format("%Y-%m-%d").to_string(),
    }
}

/// Whole minutes between `start` and `end`, e.g. "12 min"
pub fn duration_label(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let minutes = (end - start).max(Duration::zero()).num_minutes();
    format!("{minutes} min")
}

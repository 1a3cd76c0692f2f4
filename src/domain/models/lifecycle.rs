//! State of the single active interview driven by the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Controller state for one active session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "question_index", rename_all = "snake_case")]
pub enum LifecycleState {
    /// Waiting for the answer to the question at this index
    AwaitingAnswer(usize),
    /// Feedback for the question at this index is on display
    ReviewingFeedback(usize),
    /// Persisting the current answer before moving on
    Advancing,
    /// Last question answered, session completed
    Finished,
}

impl LifecycleState {
    /// Question index the state refers to, if any
    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::AwaitingAnswer(i) | Self::ReviewingFeedback(i) => Some(*i),
            Self::Advancing | Self::Finished => None,
        }
    }

    /// True once every question has been answered and the session completed.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingAnswer(i) => write!(f, "awaiting an answer to question {}", i + 1),
            Self::ReviewingFeedback(i) => write!(f, "reviewing feedback for question {}", i + 1),
            Self::Advancing => f.write_str("advancing"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

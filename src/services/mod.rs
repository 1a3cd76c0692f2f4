//! Application services: the interview lifecycle and everything around it.

pub mod countdown;
pub mod history;
pub mod interview_controller;
pub mod resilient_generator;

pub use countdown::Countdown;
pub use history::{filter_by_category, summarize, HistoryService, HistorySummary};
pub use interview_controller::{InterviewController, PendingResponse};
pub use resilient_generator::{
    fallback_questions, ResilientGenerator, FALLBACK_FEEDBACK, FALLBACK_QUESTIONS,
};

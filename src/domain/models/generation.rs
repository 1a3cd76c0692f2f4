//! Requests sent to a question/feedback generator.

use serde::{Deserialize, Serialize};

use super::{CandidateProfile, InterviewCategory};

/// Request for an ordered set of interview questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// Interview category
    pub category: InterviewCategory,
    /// Target role
    pub job_title: String,
    /// Experience level
    pub experience: String,
    /// Candidate industry
    pub industry: String,
    /// Number of questions wanted
    pub count: usize,
}

impl QuestionRequest {
    /// Request for `count` questions tailored to `profile`.
    pub fn new(category: InterviewCategory, profile: &CandidateProfile, count: usize) -> Self {
        Self {
            category,
            job_title: profile.job_title.clone(),
            experience: profile.experience.clone(),
            industry: profile.industry.clone(),
            count,
        }
    }
}

/// Request for feedback on one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Question being answered
    pub question: String,
    /// Candidate answer
    pub answer: String,
    /// Target role
    pub job_title: String,
    /// Experience level
    pub experience: String,
}

impl FeedbackRequest {
    /// Feedback request for `answer` to `question`.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        profile: &CandidateProfile,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            job_title: profile.job_title.clone(),
            experience: profile.experience.clone(),
        }
    }
}

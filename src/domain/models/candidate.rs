//! Candidate details used to tailor generated questions.

use serde::{Deserialize, Serialize};

/// Prompt parameters describing the candidate being interviewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Target role, e.g. "Backend Engineer"
    pub job_title: String,

    /// Experience level, e.g. "senior" or "3 years"
    pub experience: String,

    /// Industry the role belongs to
    pub industry: String,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            job_title: "Software Engineer".to_string(),
            experience: "mid-level".to_string(),
            industry: "technology".to_string(),
        }
    }
}

impl CandidateProfile {
    /// Profile from its three parts.
    pub fn new(
        job_title: impl Into<String>,
        experience: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            experience: experience.into(),
            industry: industry.into(),
        }
    }
}

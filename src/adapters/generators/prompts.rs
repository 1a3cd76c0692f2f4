//! Prompt text and response parsing shared by text-generation adapters.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FeedbackRequest, QuestionRequest};

/// Prompt asking for `request.count` questions as a JSON array of strings.
pub fn question_prompt(request: &QuestionRequest) -> String {
    format!(
        "Generate {count} realistic interview questions for a {experience} {job_title} in the {industry} industry.\n\
         The interview type is {kind} (technical, behavioral, or industry-specific).\n\
         Format the response as a JSON array of strings.",
        count = request.count,
        experience = request.experience,
        job_title = request.job_title,
        industry = request.industry,
        kind = request.category.prompt_label(),
    )
}

/// Prompt asking for short feedback on one answer.
pub fn feedback_prompt(request: &FeedbackRequest) -> String {
    format!(
        "You are an expert interviewer for {job_title} positions.\n\n\
         The candidate has {experience} of experience and provided the following answer to this interview question:\n\n\
         Question: \"{question}\"\n\n\
         Answer: \"{answer}\"\n\n\
         Please provide constructive feedback on the candidate's response. Consider:\n\
         1. Relevance to the question\n\
         2. Clarity and structure\n\
         3. Use of specific examples\n\
         4. Areas of strength\n\
         5. Areas for improvement\n\n\
         Provide your feedback in a helpful, constructive tone in 3-5 sentences.",
        job_title = request.job_title,
        experience = request.experience,
        question = request.question,
        answer = request.answer,
    )
}

/// Pulls the question list out of free-form model output.
///
/// Models tend to wrap the array in prose or code fences, so the span from the
/// first `[` to the last `]` is parsed. Blank entries are dropped.
pub fn extract_question_list(text: &str) -> DomainResult<Vec<String>> {
    let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) else {
        return Err(DomainError::GeneratorFailed("response contained no JSON array".to_string()));
    };
    if end < start {
        return Err(DomainError::GeneratorFailed("response contained no JSON array".to_string()));
    }

    let questions: Vec<String> = serde_json::from_str(&text[start..=end])?;
    Ok(questions
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CandidateProfile, InterviewCategory};

    #[test]
    fn test_question_prompt_mentions_parameters() {
        let profile = CandidateProfile::new("Data Engineer", "senior", "finance");
        let prompt = question_prompt(&QuestionRequest::new(InterviewCategory::Industry, &profile, 3));

        assert!(prompt.starts_with("Generate 3 realistic interview questions for a senior Data Engineer"));
        assert!(prompt.contains("finance industry"));
        assert!(prompt.contains("The interview type is industry-specific"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_feedback_prompt_quotes_exchange() {
        let profile = CandidateProfile::default();
        let prompt = feedback_prompt(&FeedbackRequest::new("Why Rust?", "Safety.", &profile));

        assert!(prompt.contains("Question: \"Why Rust?\""));
        assert!(prompt.contains("Answer: \"Safety.\""));
        assert!(prompt.contains("Software Engineer positions"));
        assert!(prompt.contains("3-5 sentences"));
    }

    #[test]
    fn test_extract_from_fenced_output() {
        let text = "Sure! Here you go:\n```json\n[\"One?\", \"  Two?  \", \"\"]\n```";
        assert_eq!(extract_question_list(text).unwrap(), vec!["One?", "Two?"]);
    }

    #[test]
    fn test_extract_rejects_missing_array() {
        assert!(matches!(
            extract_question_list("no list here"),
            Err(DomainError::GeneratorFailed(_))
        ));
        assert!(matches!(
            extract_question_list("] backwards ["),
            Err(DomainError::GeneratorFailed(_))
        ));
    }

    #[test]
    fn test_extract_rejects_non_string_array() {
        assert!(matches!(
            extract_question_list("[1, 2, 3]"),
            Err(DomainError::SerializationError(_))
        ));
    }
}

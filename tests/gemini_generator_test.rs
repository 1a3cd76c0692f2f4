//! Integration tests for the Gemini generator against a mock HTTP server.

use mockito::{Matcher, Server};

use mock_interview::adapters::generators::GeminiGenerator;
use mock_interview::domain::models::{
    CandidateProfile, FeedbackRequest, GeneratorConfig, GeneratorProvider, InterviewCategory,
    QuestionRequest,
};
use mock_interview::domain::ports::InterviewGenerator;
use mock_interview::DomainError;

const ENDPOINT: &str = "/models/gemini-1.5-flash:generateContent";

fn config_for(server: &Server) -> GeneratorConfig {
    GeneratorConfig {
        provider: GeneratorProvider::Gemini,
        base_url: server.url(),
        api_key: Some("test-key".to_string()),
        request_timeout_secs: 5,
        ..GeneratorConfig::default()
    }
}

fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

fn question_request(count: usize) -> QuestionRequest {
    QuestionRequest::new(InterviewCategory::Technical, &CandidateProfile::default(), count)
}

#[tokio::test]
async fn test_generate_questions_parses_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body(
            "Here you go:\n```json\n[\"What is a mutex?\", \"Explain ownership.\"]\n```",
        ))
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let questions = generator.generate_questions(&question_request(2)).await.unwrap();

    assert_eq!(questions, vec!["What is a mutex?", "Explain ownership."]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_prompt_names_category_and_count() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("technical".to_string()))
        .with_status(200)
        .with_body(candidate_body("[\"Q1\", \"Q2\", \"Q3\"]"))
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let questions = generator.generate_questions(&question_request(3)).await.unwrap();

    assert_eq!(questions.len(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_feedback_returns_trimmed_text() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(candidate_body("  Clear structure, add a concrete metric.\n"))
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let request = FeedbackRequest::new(
        "Tell me about a conflict.",
        "I talked it through with my teammate.",
        &CandidateProfile::default(),
    );
    let feedback = generator.generate_feedback(&request).await.unwrap();

    assert_eq!(feedback, "Clear structure, add a concrete metric.");
}

#[tokio::test]
async fn test_server_error_maps_to_generator_failed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let result = generator.generate_questions(&question_request(1)).await;

    match result {
        Err(DomainError::GeneratorFailed(message)) => assert!(message.contains("500")),
        other => panic!("expected GeneratorFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reply_without_array_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(candidate_body("I cannot help with that."))
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let result = generator.generate_questions(&question_request(2)).await;

    assert!(matches!(result, Err(DomainError::GeneratorFailed(_))));
}

#[tokio::test]
async fn test_empty_candidates_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let request = FeedbackRequest::new("Q", "A", &CandidateProfile::default());
    let result = generator.generate_feedback(&request).await;

    assert!(matches!(result, Err(DomainError::GeneratorFailed(_))));
}

#[test]
fn test_missing_api_key_fails_without_request() {
    temp_env::with_var_unset("GEMINI_API_KEY", || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let config = GeneratorConfig {
                provider: GeneratorProvider::Gemini,
                base_url: "http://127.0.0.1:9".to_string(),
                api_key: None,
                ..GeneratorConfig::default()
            };
            let generator = GeminiGenerator::new(config).unwrap();
            let result = generator.generate_questions(&question_request(1)).await;

            match result {
                Err(DomainError::GeneratorFailed(message)) => {
                    assert!(message.contains("GEMINI_API_KEY"));
                }
                other => panic!("expected GeneratorFailed, got {other:?}"),
            }
        });
    });
}

#[tokio::test]
async fn test_api_key_stays_out_of_the_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_query(Matcher::Missing)
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_body(candidate_body("Good answer."))
        .create_async()
        .await;

    let generator = GeminiGenerator::new(config_for(&server)).unwrap();
    let request = FeedbackRequest::new("Q", "A", &CandidateProfile::default());
    generator.generate_feedback(&request).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_error_does_not_reveal_api_key() {
    let secret = "SUPER-SECRET-KEY";
    let config = GeneratorConfig {
        provider: GeneratorProvider::Gemini,
        base_url: "http://127.0.0.1:1/v1beta".to_string(),
        api_key: Some(secret.to_string()),
        request_timeout_secs: 5,
        ..GeneratorConfig::default()
    };
    let generator = GeminiGenerator::new(config).unwrap();
    let request = FeedbackRequest::new("Q", "A", &CandidateProfile::default());

    let err = generator.generate_feedback(&request).await.unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, DomainError::GeneratorFailed(_)));
    assert!(!message.contains(secret), "error leaked the key: {message}");
}

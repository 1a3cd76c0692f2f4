//! Gemini `generateContent` generator.
//!
//! Sends a single user prompt per call and reads the first candidate's text.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use super::prompts::{extract_question_list, feedback_prompt, question_prompt};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FeedbackRequest, GeneratorConfig, QuestionRequest};
use crate::domain::ports::InterviewGenerator;

const MAX_OUTPUT_TOKENS: u32 = 1024;
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Generator backed by the Gemini `generateContent` endpoint.
pub struct GeminiGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl GeminiGenerator {
    /// Builds the HTTP client from `config`; the API key is resolved per request.
    pub fn new(config: GeneratorConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::GeneratorFailed(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model.trim()
        )
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model), err)]
    async fn generate_text(&self, prompt: String) -> DomainResult<String> {
        let api_key = self
            .config
            .resolved_api_key()
            .ok_or_else(|| DomainError::GeneratorFailed("GEMINI_API_KEY not set".to_string()))?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::GeneratorFailed(format!("request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::GeneratorFailed(format!("API error {status}: {body}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                let e = e.without_url();
                DomainError::GeneratorFailed(format!("failed to parse response: {e}"))
            })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join(""))
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(DomainError::GeneratorFailed("response had no candidate text".to_string()));
        }

        debug!(chars = text.len(), "generation received");
        Ok(text)
    }
}

#[async_trait]
impl InterviewGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate_questions(&self, request: &QuestionRequest) -> DomainResult<Vec<String>> {
        let text = self.generate_text(question_prompt(request)).await?;
        extract_question_list(&text)
    }

    async fn generate_feedback(&self, request: &FeedbackRequest) -> DomainResult<String> {
        let text = self.generate_text(feedback_prompt(request)).await?;
        Ok(text.trim().to_string())
    }
}

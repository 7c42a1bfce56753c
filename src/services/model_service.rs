//! Client for the external AI text-generation provider.
//!
//! Only chat completions are used: one rendered prompt in, one completion out.
//! The API key is never logged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const SYSTEM_PROMPT: &str = "You write assessment questions for reading passages. \
Follow the user's instructions exactly and answer with a single JSON object, no prose.";

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Sends the rendered prompt and returns the raw completion text.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiQuestionGenerator {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
}

impl OpenAiQuestionGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs.max(60)))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build AI client: {}", e)))?;

        if config.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; question generation will fail");
        }

        Ok(Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            api_key: config.openai_api_key.clone(),
        })
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiQuestionGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::UpstreamError("OPENAI_API_KEY is not configured".to_string()))?;

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.7,
            response_format: ResponseFormat {
                r#type: "json_object",
            },
        };

        let started = std::time::Instant::now();
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamError(format!("HTTP {}: {}", status, body)));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid completion payload: {}", e)))?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AppError::UpstreamError("Completion contained no text".to_string()))?;

        log::info!(
            "AI completion from {} in {} ms ({} chars)",
            self.model,
            started.elapsed().as_millis(),
            text.len()
        );

        Ok(text)
    }
}

/// Parses a completion as JSON, tolerating a surrounding Markdown code fence.
/// Text that is not JSON is kept as `{ "text": ... }`.
pub fn parse_completion(text: &str) -> serde_json::Value {
    let trimmed = text.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    serde_json::from_str(unfenced).unwrap_or_else(|_| serde_json::json!({ "text": trimmed }))
}

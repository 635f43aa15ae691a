//! LLM Client: the single point of entry for all completion API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! All LLM interactions MUST go through a `CompletionService`.
//!
//! One request per call. No retry, no backoff, no fallback: every failure is
//! handed back to the caller as-is.
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

/// The model used for all completion calls.
/// Hardcoded to keep profile output comparable across runs.
pub const MODEL: &str = "gpt-4.1-2025-04-14";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            LlmError::EmptyContent => None,
        }
    }
}

/// Everything the remote service needs for one completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub model: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The completion backend seam. `LlmClient` talks to the real endpoint;
/// tests substitute their own implementation.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Token accounting, logged only. Compatible endpoints may omit any field.
#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LlmClient {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(config.openai_api_key.clone(), config.openai_base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a single call to the chat completions API, returning the full response object.
    pub async fn call(&self, request: &CompletionRequest<'_>) -> Result<ChatResponse, LlmError> {
        let body = ChatRequest {
            model: request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            model = request.model,
            prompt_chars = request.prompt.len(),
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's own error message when the body carries one
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        let response = self.call(request).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

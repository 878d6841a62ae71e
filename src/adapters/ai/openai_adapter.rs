//! OpenAI-compatible adapter for chat completions.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Each attempt is bounded by a client-level timeout; transient failures get a bounded retry.

use super::retry::{AttemptError, RetryPolicy};
use crate::domain::{CompletionPrompt, DomainError};
use crate::ports::CompletionPort;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible completion adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    retry: RetryPolicy,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4", "llama3.2")
    /// * `timeout` - Upper bound for a single attempt, connect through body
    /// * `retry` - Retry policy for transient failures
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Unexpected(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            retry,
        })
    }

    fn build_request(&self, prompt: &CompletionPrompt) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: prompt.temperature,
        }
    }

    async fn send_once(&self, request: &ChatRequest) -> Result<String, AttemptError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| classify_transport_error("HTTP request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            let msg = format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            );
            return Err(if is_transient_status(status) {
                AttemptError::Transient(msg)
            } else {
                AttemptError::Fatal(msg)
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| classify_transport_error("Failed to parse API response", e))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AttemptError::Fatal("No response choices returned".to_string()))
    }
}

/// 429 and 5xx are worth retrying; other statuses are not.
fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn classify_transport_error(context: &str, e: reqwest::Error) -> AttemptError {
    let msg = format!("{}: {}", context, e);
    if e.is_timeout() || e.is_connect() {
        AttemptError::Transient(msg)
    } else {
        AttemptError::Fatal(msg)
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl CompletionPort for OpenAiAdapter {
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String, DomainError> {
        info!(
            purpose = %prompt.purpose,
            model = %self.model,
            user_len = prompt.user.len(),
            "sending prompt to AI provider"
        );

        let request = self.build_request(prompt);
        let content = self.retry.run(|| self.send_once(&request)).await?;

        debug!(purpose = %prompt.purpose, raw_len = content.len(), "received AI response");
        Ok(content)
    }
}

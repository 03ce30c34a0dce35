//! OpenAI-compatible HTTP backend.
//!
//! Raw `chat/completions` client over reqwest. No orchestration awareness -
//! one request in, one completion out. Works against any endpoint speaking
//! the OpenAI wire format (api.openai.com, compatible proxies, local mock
//! servers via a custom base URL).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use weft_core::application::ports::{GeneratorError, TextGenerator};

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible `TextGenerator` backend.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    http: Client,
    api_key: String,
    base_url: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiGenerator {
    /// Create a generator against the default endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.into())
    }

    /// Create a generator with a custom base URL (compatible proxies, mock
    /// servers in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// Override the completion token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            model,
            max_tokens = self.max_tokens,
            temperature = self.temperature,
            "Invoking chat completion"
        );

        let body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(GeneratorError::Api { status, message });
        }

        let completion: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| GeneratorError::InvalidResponse {
                    message: format!("failed to parse response: {e}"),
                })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GeneratorError::InvalidResponse {
                message: "response missing choices[0]".into(),
            })?;

        let content = choice
            .message
            .content
            .ok_or_else(|| GeneratorError::InvalidResponse {
                message: "response missing content in choices[0]".into(),
            })?;

        debug!(bytes = content.len(), "Completion received");
        Ok(content)
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

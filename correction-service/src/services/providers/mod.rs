//! Chat-completion provider abstraction.
//!
//! The correction flow talks to the upstream model through
//! [`CompletionProvider`] so that handlers can be exercised against an
//! injected provider. [`groq::GroqClient`] is the production backend.

pub mod groq;
pub mod mock;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Upstream answered with a non-200 status; body kept verbatim.
    #[error("Groq API error: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Groq API request failed: {0}")]
    Network(String),

    /// 200 response without `choices[0].message.content`.
    #[error("Groq API returned an unexpected response: {0}")]
    MalformedResponse(String),
}

/// A single chat message in the OpenAI-compatible wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// The subset of the completion response this service reads.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

/// Trait for single-shot chat completion backends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` as one user message and return the model's reply.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier requests are sent with.
    fn model(&self) -> &str;
}

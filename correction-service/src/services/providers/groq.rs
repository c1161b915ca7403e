//! Groq chat-completions client.
//!
//! One POST per call. No retry and no client-side timeout: the request waits
//! for whatever the transport eventually reports.

use super::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionProvider, ProviderError,
};
use crate::config::GroqSettings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;

/// Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    config: GroqSettings,
}

impl GroqClient {
    pub fn new(config: GroqSettings) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }

    /// Bearer token; empty when no key is configured so the upstream rejects it.
    fn api_key(&self) -> &str {
        self.config
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = self.build_request(prompt);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        tracing::info!(status = %status, response = %body, "Groq API response");

        if status != StatusCode::OK {
            return Err(ProviderError::Upstream { status, body });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        completion
            .into_first_content()
            .ok_or_else(|| ProviderError::MalformedResponse("no choices in response".to_string()))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

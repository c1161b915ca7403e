//! Mock provider implementation for testing.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Upstream(StatusCode, String),
    Malformed(String),
    Network(String),
}

/// Mock completion provider that records every prompt it receives.
pub struct MockCompletionProvider {
    reply: MockReply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockReply::Text(text.into()))
    }

    /// Number of completed `complete` calls.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Upstream(status, body) => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Malformed(detail) => Err(ProviderError::MalformedResponse(detail.clone())),
            MockReply::Network(detail) => Err(ProviderError::Network(detail.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

//! Correction proxy: prompt construction and upstream error mapping.

use crate::services::providers::{CompletionProvider, ProviderError};
use metrics::counter;
use service_core::error::AppError;
use std::sync::Arc;

/// Returned when the request carries no usable text.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Wrap user text in the fixed correction instruction.
pub fn correction_prompt(text: &str) -> String {
    format!(
        "Please correct the grammar, articulation and English usage of the following text: \"{}\"",
        text
    )
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, .. } => AppError::Upstream(status, err.to_string()),
            ProviderError::Network(_) | ProviderError::MalformedResponse(_) => {
                AppError::BadGateway(err.to_string())
            }
        }
    }
}

/// Metric name for correction attempts, labelled by `outcome`.
pub const CORRECTION_REQUESTS_TOTAL: &str = "correction_requests_total";

/// Register help text for the service's own metrics. Call after the recorder
/// is installed.
pub fn describe_metrics() {
    metrics::describe_counter!(CORRECTION_REQUESTS_TOTAL, "Correction requests by outcome");
}

fn outcome_label(result: &Result<String, ProviderError>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(ProviderError::Upstream { .. }) => "upstream_error",
        Err(ProviderError::MalformedResponse(_)) => "bad_response",
        Err(ProviderError::Network(_)) => "transport_error",
    }
}

/// Validates input, prompts the provider and relays the result.
#[derive(Clone)]
pub struct CorrectionService {
    provider: Arc<dyn CompletionProvider>,
}

impl CorrectionService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn correct(&self, text: Option<&str>) -> Result<String, AppError> {
        let Some(text) = text else {
            counter!(CORRECTION_REQUESTS_TOTAL, "outcome" => "invalid").increment(1);
            return Err(AppError::BadRequest(anyhow::anyhow!(NO_TEXT_PROVIDED)));
        };

        let prompt = correction_prompt(text);
        let result = self.provider.complete(&prompt).await;
        counter!(CORRECTION_REQUESTS_TOTAL, "outcome" => outcome_label(&result)).increment(1);

        match result {
            Ok(corrected_text) => {
                tracing::info!(corrected_text = %corrected_text, "Corrected text");
                Ok(corrected_text)
            }
            Err(err) => {
                tracing::warn!(
                    model = %self.provider.model(),
                    error = %err,
                    "Correction failed"
                );
                Err(err.into())
            }
        }
    }
}

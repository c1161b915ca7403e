pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use metrics_exporter_prometheus::PrometheusHandle;
use services::{CompletionProvider, CorrectionService};
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub correction_service: CorrectionService,
    /// `None` when no recorder was installed (tests); `/metrics` is then empty.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            correction_service: CorrectionService::new(provider),
            metrics_handle,
        }
    }
}

//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::handlers::{
    app::{health_check, index, not_found},
    correct::correct_handler,
    metrics::metrics,
};
use crate::services::{CompletionProvider, GroqClient};
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/correct", post(correct_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        // Outermost so the trace span sees the request id.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application against the real Groq API.
    pub async fn build(
        settings: Settings,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Result<Self, AppError> {
        if !settings.groq.has_api_key() {
            tracing::warn!(
                "GROQ_API_KEY is not set; correction requests will be rejected by the Groq API"
            );
        }

        tracing::info!(
            model = %settings.groq.model,
            endpoint = %settings.groq.api_url,
            "Initialized Groq completion provider"
        );

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(GroqClient::new(settings.groq.clone()));

        Self::build_with_provider(&settings, provider, metrics_handle).await
    }

    /// Build the application around an arbitrary provider.
    pub async fn build_with_provider(
        settings: &Settings,
        provider: Arc<dyn CompletionProvider>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Result<Self, AppError> {
        let address = format!("{}:{}", settings.server.host, settings.server.port);
        // Port 0 picks a random free port (tests).
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState::new(provider, metrics_handle));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Starting correction-service on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

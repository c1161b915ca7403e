use correction_service::config::get_configuration;
use correction_service::services::correction::describe_metrics;
use correction_service::startup::Application;
use service_core::observability::logging::default_log_level;
use service_core::observability::{init_tracing, install_metrics_recorder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing(
        "correction-service",
        default_log_level(configuration.server.debug),
        otlp_endpoint.as_deref(),
    );

    let metrics_handle = install_metrics_recorder()
        .map_err(|e| tracing::warn!("Metrics recorder unavailable: {}", e))
        .ok();
    describe_metrics();

    let application = Application::build(configuration, metrics_handle)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build application: {}", e);
            anyhow::anyhow!("Startup error: {}", e)
        })?;

    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::PathBuf;

/// Locate a service's `config` directory.
///
/// Works both when started from the workspace root and from inside the
/// service's own directory.
pub fn configuration_directory(service_dir: &str) -> PathBuf {
    let base_path = std::env::current_dir().unwrap_or_default();

    if base_path.ends_with(service_dir) {
        base_path.join("config")
    } else {
        base_path.join(service_dir).join("config")
    }
}

/// Layered settings builder: optional `config/base.yaml` first, then
/// `APP_`-prefixed environment variables (`APP_SERVER__PORT=8080`).
///
/// A `.env` file, if present, is loaded here; binaries need not load it again.
///
/// Services add their own overrides on top and call `build()`.
pub fn config_builder(service_dir: &str) -> ConfigBuilder<DefaultState> {
    dotenvy::dotenv().ok();

    let configuration_directory = configuration_directory(service_dir);

    config::Config::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
}

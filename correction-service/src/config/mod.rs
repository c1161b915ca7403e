use secrecy::Secret;
use serde::Deserialize;
use service_core::config::config_builder;

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub groq: GroqSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Raises the default log level to `debug`.
    #[serde(default)]
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

#[derive(Deserialize, Clone, Debug)]
pub struct GroqSettings {
    /// OpenAI-compatible chat completions endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Absent keys are tolerated at startup; requests then fail upstream.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
}

impl Default for GroqSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

impl GroqSettings {
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Builder first: it loads `.env`, which may carry the key.
    let builder = config_builder("correction-service");

    let api_key = std::env::var(GROQ_API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty());

    let settings = builder
        .set_override_option("groq.api_key", api_key)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

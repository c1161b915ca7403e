#![allow(dead_code)]

use correction_service::config::{GroqSettings, ServerSettings, Settings};
use correction_service::startup::Application;
use secrecy::Secret;
use std::time::Duration;
use wiremock::MockServer;

pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
pub const TEST_API_KEY: &str = "gsk_test_key";
pub const TEST_MODEL: &str = "llama-3.3-70b-versatile";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub groq: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with its Groq endpoint pointed at a wiremock server.
    pub async fn spawn() -> Self {
        Self::spawn_with_key(Some(TEST_API_KEY)).await
    }

    pub async fn spawn_with_key(api_key: Option<&str>) -> Self {
        let groq = MockServer::start().await;
        let api_url = format!("{}{}", groq.uri(), COMPLETIONS_PATH);
        let (address, port) = launch(&api_url, api_key).await;

        TestApp {
            address,
            port,
            groq,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_correct(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/correct", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Start the service against `api_url` and wait until `/health` answers.
///
/// Returns the base address and the bound port.
pub async fn launch(api_url: &str, api_key: Option<&str>) -> (String, u16) {
    let settings = Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: false,
        },
        groq: GroqSettings {
            api_url: api_url.to_string(),
            model: TEST_MODEL.to_string(),
            api_key: api_key.map(|key| Secret::new(key.to_string())),
        },
    };

    let app = Application::build(settings, None)
        .await
        .expect("Failed to build test application");

    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    let client = reqwest::Client::new();
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    (address, port)
}

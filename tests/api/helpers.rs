use std::net::TcpListener;
use std::time::Duration;

use contact_relay::startup::run;
use contact_relay::telemetry::{get_subscriber, init_subscriber};
use contact_relay::webhook_client::WebhookClient;
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    /// Stands in for the upstream automation webhook.
    pub webhook_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to submit contact form")
    }
}

/// Spawns the app wired to a fresh mock webhook, no secret configured.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_secret(None).await
}

pub async fn spawn_app_with_secret(secret: Option<Secret<String>>) -> TestApp {
    let webhook_server = MockServer::start().await;
    let webhook_client = WebhookClient::new(
        format!("{}/webhook", webhook_server.uri()),
        secret,
        Duration::from_secs(2),
    )
    .expect("Failed to build webhook client");
    spawn_app_inner(Some(webhook_client), webhook_server).await
}

/// Spawns the app with no webhook URL configured. The mock server is still
/// returned so tests can assert that nothing reaches it.
pub async fn spawn_app_unconfigured() -> TestApp {
    let webhook_server = MockServer::start().await;
    spawn_app_inner(None, webhook_server).await
}

async fn spawn_app_inner(
    webhook_client: Option<WebhookClient>,
    webhook_server: MockServer,
) -> TestApp {
    Lazy::force(&TRACING);
    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr()
        .unwrap()
        .port();

    let server = run(listener, webhook_client)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        webhook_server,
    }
}

pub fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane",
        "email": "jane@x.com",
        "message": "hi"
    })
}

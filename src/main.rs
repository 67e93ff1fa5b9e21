use std::net::TcpListener;
use contact_relay::configuration::get_configuration;
use contact_relay::startup::run;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        "contact-relay".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .expect("Failed to read config file");
    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;
    let webhook_client = config.webhook.client()
        .expect("Failed to build webhook client");
    if webhook_client.is_none() {
        tracing::warn!("No webhook URL configured; contact submissions will be rejected");
    }

    run(listener, webhook_client)?.await
}

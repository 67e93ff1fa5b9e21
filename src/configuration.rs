use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::webhook_client::WebhookClient;

#[derive(serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub webhook: WebhookSettings,
}

#[derive(serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize)]
pub struct WebhookSettings {
    pub url: Option<String>,
    pub secret: Option<Secret<String>>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl WebhookSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    /// `None` when no webhook URL is configured; the relay endpoint
    /// then answers every submission with the not-configured message.
    pub fn client(&self) -> Result<Option<WebhookClient>, reqwest::Error> {
        match &self.url {
            Some(url) => {
                let client = WebhookClient::new(
                    url.clone(),
                    self.secret.clone(),
                    self.timeout(),
                )?;
                Ok(Some(client))
            }
            None => Ok(None),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();

    // Read config file
    settings.merge(config::File::with_name("config"))?;

    // Environment overrides, e.g. APP_WEBHOOK__URL, APP_WEBHOOK__SECRET
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}

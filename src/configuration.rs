//! src/configuration.rs

use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub store: Option<StoreSettings>,
}

/// Credentials for the hosted signup store. Both values come from the
/// project's dashboard; the access key is the public anon key, not a service
/// role key.
#[derive(Deserialize, Clone)]
pub struct StoreSettings {
    pub url: String,
    pub access_key: Secret<String>,
}

impl Settings {
    /// The store section is only usable when both values are present and
    /// non-empty. A missing or blank pair is a valid state: the workflow
    /// still runs, but rejects every submission with a support message.
    pub fn configured_store(&self) -> Option<&StoreSettings> {
        self.store
            .as_ref()
            .filter(|s| !s.url.is_empty() && !s.access_key.expose_secret().is_empty())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            // APP_STORE__URL -> Settings.store.url
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize()
}

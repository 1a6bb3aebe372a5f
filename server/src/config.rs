use std::sync::OnceLock;

use anyhow::anyhow;
use config::{ConfigBuilder, Environment, File, builder::DefaultState};
use secrecy::SecretString;
use serde::Deserialize;
use types::{Error, Result};
use url::Url;

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the hosted database service; REST and auth live under it.
    pub store_url: Url,
    /// Public API key sent with every request to the hosted service.
    pub store_anon_key: SecretString,
    /// Cookie holding the hosted service's access token.
    pub session_cookie: String,
    /// Mark the session cookie `Secure`. Off only for plain-http development.
    pub secure_cookie: bool,
}

impl Config {
    /// Read `pathfinder.toml` (optional) and `PATHFINDER_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::build(
            config::Config::builder()
                .add_source(File::with_name("pathfinder").required(false))
                .add_source(Environment::with_prefix("PATHFINDER")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .set_default("session_cookie", "pathfinder_session")
            .map_err(Error::config)?
            .set_default("secure_cookie", true)
            .map_err(Error::config)?
            .build()
            .map_err(Error::config)?
            .try_deserialize()
            .map_err(Error::config)
    }
}

/// Install the process-wide configuration. Later calls keep the first value.
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

pub fn get() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::config(anyhow!("configuration was not loaded; call server::init first")))
}

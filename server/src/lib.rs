mod auth;
mod auth_routes;
pub mod config;
pub mod dashboard;
mod session;
pub mod store;
#[cfg(test)]
mod test_support;

use anyhow::anyhow;
use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use reqwest::Client;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use types::{Error, Result};

use crate::auth_routes::AuthState;

pub use crate::auth::AuthClient;
pub use crate::config::Config;
pub use crate::session::UserSession;
pub use crate::store::StoreClient;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load configuration and build the server-side routes.
pub async fn init() -> Result<Router> {
    let config = config::install(Config::load()?);
    tracing::info!(store = %config.store_url, "configuration loaded");

    Ok(auth_routes::auth_router(AuthState::new(config)))
}

pub(crate) fn auth_client(config: &Config) -> AuthClient {
    AuthClient::new(
        Client::new(),
        config.store_url.clone(),
        config.store_anon_key.clone(),
    )
}

/// The session token carried by the current request, if any.
async fn request_token() -> Result<Option<SecretString>> {
    let config = config::get()?;
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|e| Error::auth(anyhow!("cannot read request headers: {e}")))?;

    Ok(headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|header| session::token_from_cookie_header(header, &config.session_cookie)))
}

/// Resolve the signed-in user behind the current request.
pub async fn current_session() -> Result<Option<UserSession>> {
    let Some(token) = request_token().await? else {
        return Ok(None);
    };

    auth_client(config::get()?).current_session(token).await
}

/// A data store client acting as the signed-in user.
pub async fn session_store() -> Result<StoreClient> {
    let config = config::get()?;
    let token = request_token().await?.ok_or(Error::Unauthenticated)?;

    Ok(StoreClient::new(
        Client::new(),
        config.store_url.clone(),
        config.store_anon_key.clone(),
        token,
    ))
}

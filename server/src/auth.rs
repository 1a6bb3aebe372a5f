use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use types::{Error, Result};
use url::Url;
use uuid::Uuid;

use crate::session::UserSession;

/// Client for the hosted auth service.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

#[derive(Deserialize)]
struct AuthUser {
    id: Uuid,
    email: Option<String>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: SecretString,
    expires_in: i64,
}

/// A freshly issued access token.
pub struct Grant {
    pub access_token: SecretString,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

impl AuthClient {
    pub fn new(client: Client, base_url: Url, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Exchange an email and password for an access token. Rejected credentials are
    /// `None`; only transport or service failures are errors.
    pub async fn sign_in(&self, email: &str, password: &SecretString) -> Result<Option<Grant>> {
        let mut url = self.base_url.join("/auth/v1/token").map_err(Error::auth)?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .client
            .post(url)
            .header("apikey", self.api_key.expose_secret())
            .json(&PasswordGrant {
                email,
                password: password.expose_secret(),
            })
            .send()
            .await
            .map_err(Error::auth)?;

        if matches!(response.status(), StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            tracing::debug!(status = %response.status(), "credentials rejected");
            return Ok(None);
        }

        let token: TokenResponse = response
            .error_for_status()
            .map_err(Error::auth)?
            .json()
            .await
            .map_err(Error::auth)?;

        Ok(Some(Grant {
            access_token: token.access_token,
            expires_in: token.expires_in,
        }))
    }

    /// Resolve the user behind `access_token`. A token the service rejects is no session,
    /// not an error.
    pub async fn current_session(&self, access_token: SecretString) -> Result<Option<UserSession>> {
        let url = self.base_url.join("/auth/v1/user").map_err(Error::auth)?;
        let response = self
            .client
            .get(url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token.expose_secret())
            .send()
            .await
            .map_err(Error::auth)?;

        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::debug!(status = %response.status(), "session token rejected");
            return Ok(None);
        }

        let user: AuthUser = response
            .error_for_status()
            .map_err(Error::auth)?
            .json()
            .await
            .map_err(Error::auth)?;

        Ok(Some(UserSession {
            user_id: user.id,
            email: user.email,
            access_token,
        }))
    }

    /// End the session on the service. Ending an already-ended session succeeds.
    pub async fn sign_out(&self, access_token: &SecretString) -> Result<()> {
        let url = self.base_url.join("/auth/v1/logout").map_err(Error::auth)?;
        let response = self
            .client
            .post(url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token.expose_secret())
            .send()
            .await
            .map_err(Error::auth)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(()),
            _ => response.error_for_status().map(drop).map_err(Error::auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        Json, Router,
        extract::Query,
        http::HeaderMap,
        routing::{get, post},
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::test_support::serve;

    const USER: Uuid = Uuid::from_u128(0xa1);

    fn client(base_url: Url) -> AuthClient {
        AuthClient::new(Client::new(), base_url, "anon".to_string().into())
    }

    fn secret(value: &str) -> SecretString {
        value.to_string().into()
    }

    fn header(headers: &HeaderMap, name: &str) -> Option<String> {
        headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
    }

    /// Every auth endpoint answers with `status` and an empty body.
    fn answering(status: StatusCode) -> Router {
        let reply = move || async move { (status, Json(json!({}))) };
        Router::new()
            .route("/auth/v1/token", post(reply))
            .route("/auth/v1/user", get(reply))
            .route("/auth/v1/logout", post(reply))
    }

    #[tokio::test]
    async fn sign_in_returns_the_issued_token() {
        let base = serve(Router::new().route(
            "/auth/v1/token",
            post(
                |Query(params): Query<HashMap<String, String>>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    let valid = params.get("grant_type").map(String::as_str) == Some("password")
                        && header(&headers, "apikey").as_deref() == Some("anon")
                        && body == json!({ "email": "asha@example.com", "password": "hunter22" });

                    if valid {
                        (
                            StatusCode::OK,
                            Json(json!({ "access_token": "jwt", "expires_in": 3600, "token_type": "bearer" })),
                        )
                    } else {
                        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({})))
                    }
                },
            ),
        ))
        .await;

        let grant = client(base)
            .sign_in("asha@example.com", &secret("hunter22"))
            .await
            .unwrap()
            .expect("credentials were accepted");

        assert_eq!(grant.access_token.expose_secret(), "jwt");
        assert_eq!(grant.expires_in, 3600);
    }

    #[tokio::test]
    async fn rejected_credentials_are_no_grant() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED] {
            let base = serve(answering(status)).await;
            let result = client(base).sign_in("asha@example.com", &secret("wrong")).await;
            assert!(matches!(result, Ok(None)), "{status}");
        }
    }

    #[tokio::test]
    async fn sign_in_service_failure_is_an_error() {
        let base = serve(answering(StatusCode::INTERNAL_SERVER_ERROR)).await;
        let result = client(base).sign_in("asha@example.com", &secret("hunter22")).await;
        assert!(matches!(result, Err(Error::Auth(ref message)) if message.contains("500")));
    }

    #[tokio::test]
    async fn current_session_resolves_the_user() {
        let base = serve(Router::new().route(
            "/auth/v1/user",
            get(|headers: HeaderMap| async move {
                if header(&headers, "authorization").as_deref() == Some("Bearer jwt") {
                    (StatusCode::OK, Json(json!({ "id": USER, "email": "asha@example.com" })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({})))
                }
            }),
        ))
        .await;

        let session = client(base)
            .current_session(secret("jwt"))
            .await
            .unwrap()
            .expect("token was accepted");

        assert_eq!(session.user_id, USER);
        assert_eq!(session.email.as_deref(), Some("asha@example.com"));
        assert_eq!(session.access_token.expose_secret(), "jwt");
    }

    #[tokio::test]
    async fn rejected_token_is_no_session() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let base = serve(answering(status)).await;
            let result = client(base).current_session(secret("stale")).await;
            assert!(matches!(result, Ok(None)), "{status}");
        }
    }

    #[tokio::test]
    async fn current_session_service_failure_is_an_error() {
        let base = serve(answering(StatusCode::INTERNAL_SERVER_ERROR)).await;
        let result = client(base).current_session(secret("jwt")).await;
        assert!(matches!(result, Err(Error::Auth(_))));
    }

    #[tokio::test]
    async fn sign_out_is_idempotent() {
        for status in [
            StatusCode::NO_CONTENT,
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
        ] {
            let base = serve(answering(status)).await;
            assert_eq!(client(base).sign_out(&secret("jwt")).await, Ok(()), "{status}");
        }
    }

    #[tokio::test]
    async fn sign_out_service_failure_is_an_error() {
        let base = serve(answering(StatusCode::INTERNAL_SERVER_ERROR)).await;
        let result = client(base).sign_out(&secret("jwt")).await;
        assert!(matches!(result, Err(Error::Auth(_))));
    }
}

use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::Cookie;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::form_urlencoded;

use crate::{AuthClient, Config, auth_client, session};

#[derive(Clone)]
pub struct AuthState {
    auth: AuthClient,
    session_cookie: String,
    secure_cookie: bool,
}

impl AuthState {
    pub fn new(config: &Config) -> Self {
        Self {
            auth: auth_client(config),
            session_cookie: config.session_cookie.clone(),
            secure_cookie: config.secure_cookie,
        }
    }
}

pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
        .with_state(state)
}

#[derive(Deserialize)]
struct Credentials {
    email: String,
    password: SecretString,
}

/// Back to the sign-in page with `message` shown.
fn login_error(message: &str) -> Response {
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    Redirect::to(&format!("/login?error={encoded}")).into_response()
}

fn with_cookie(mut response: Response, cookie: Cookie<'_>) -> Response {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(error) => tracing::error!(%error, "invalid session cookie header"),
    }
    response
}

async fn login(State(state): State<AuthState>, Form(credentials): Form<Credentials>) -> Response {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.expose_secret().is_empty() {
        return login_error("Enter your email and password");
    }

    match state.auth.sign_in(email, &credentials.password).await {
        Ok(Some(grant)) => {
            tracing::info!("signed in");
            let cookie = session::session_cookie(
                &state.session_cookie,
                grant.access_token.expose_secret().to_string(),
                grant.expires_in,
                state.secure_cookie,
            );
            with_cookie(Redirect::to("/dashboard").into_response(), cookie)
        }
        Ok(None) => {
            tracing::info!("sign-in rejected");
            login_error("Invalid email or password")
        }
        Err(error) => {
            tracing::error!(%error, "sign-in failed");
            login_error("Sign-in is unavailable, please try again")
        }
    }
}

async fn logout(State(state): State<AuthState>, headers: HeaderMap) -> Response {
    let token = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| session::token_from_cookie_header(h, &state.session_cookie));

    // The local cookie is cleared even if the provider could not be reached.
    if let Some(token) = token {
        match state.auth.sign_out(&token).await {
            Ok(()) => tracing::info!("signed out"),
            Err(error) => tracing::warn!(%error, "provider sign-out failed"),
        }
    }

    with_cookie(
        Redirect::to("/").into_response(),
        session::expired_cookie(&state.session_cookie),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use axum::{
        Json,
        body::Body,
        http::{Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::test_support::serve;

    /// The auth routes, talking to `provider` as the hosted auth service.
    async fn app(provider: Router) -> Router {
        let config = Config {
            store_url: serve(provider).await,
            store_anon_key: "anon".to_string().into(),
            session_cookie: "pathfinder_session".into(),
            secure_cookie: true,
        };
        auth_router(AuthState::new(&config))
    }

    fn token_endpoint(status: StatusCode) -> Router {
        Router::new().route(
            "/auth/v1/token",
            post(move || async move {
                (status, Json(json!({ "access_token": "jwt", "expires_in": 3600 })))
            }),
        )
    }

    fn sign_in(form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    fn header_str<'a>(response: &'a Response, name: header::HeaderName) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn accepted_credentials_set_the_session_cookie() {
        let response = app(token_endpoint(StatusCode::OK))
            .await
            .oneshot(sign_in("email=asha%40example.com&password=hunter22"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(header_str(&response, header::LOCATION), Some("/dashboard"));

        let cookie = header_str(&response, header::SET_COOKIE).unwrap();
        assert!(cookie.starts_with("pathfinder_session=jwt;"), "{cookie}");
        assert!(cookie.contains("HttpOnly"), "{cookie}");
        assert!(cookie.contains("Max-Age=3600"), "{cookie}");
    }

    #[tokio::test]
    async fn empty_fields_are_sent_back() {
        let response = app(Router::new())
            .await
            .oneshot(sign_in("email=+&password="))
            .await
            .unwrap();

        assert_eq!(
            header_str(&response, header::LOCATION),
            Some("/login?error=Enter+your+email+and+password")
        );
        assert_eq!(header_str(&response, header::SET_COOKIE), None);
    }

    #[tokio::test]
    async fn rejected_credentials_are_sent_back() {
        let response = app(token_endpoint(StatusCode::BAD_REQUEST))
            .await
            .oneshot(sign_in("email=asha%40example.com&password=wrong"))
            .await
            .unwrap();

        assert_eq!(
            header_str(&response, header::LOCATION),
            Some("/login?error=Invalid+email+or+password")
        );
        assert_eq!(header_str(&response, header::SET_COOKIE), None);
    }

    #[tokio::test]
    async fn provider_outage_is_reported_on_the_sign_in_page() {
        let response = app(token_endpoint(StatusCode::INTERNAL_SERVER_ERROR))
            .await
            .oneshot(sign_in("email=asha%40example.com&password=hunter22"))
            .await
            .unwrap();

        assert_eq!(
            header_str(&response, header::LOCATION),
            Some("/login?error=Sign-in+is+unavailable%2C+please+try+again")
        );
    }

    fn sign_out(cookie: Option<&str>) -> Request<Body> {
        let mut request = Request::builder().uri("/auth/logout");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        request.body(Body::empty()).unwrap()
    }

    fn assert_cleared(response: &Response) {
        assert_eq!(header_str(response, header::LOCATION), Some("/"));
        let cookie = header_str(response, header::SET_COOKIE).unwrap();
        assert!(cookie.starts_with("pathfinder_session=;"), "{cookie}");
        assert!(cookie.contains("Max-Age=0"), "{cookie}");
    }

    #[tokio::test]
    async fn sign_out_ends_the_provider_session() {
        let revoked = Arc::new(AtomicBool::new(false));
        let seen = revoked.clone();
        let provider = Router::new().route(
            "/auth/v1/logout",
            post(move |headers: HeaderMap| async move {
                let bearer = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
                seen.store(bearer == Some("Bearer jwt"), Ordering::SeqCst);
                StatusCode::NO_CONTENT
            }),
        );

        let response = app(provider)
            .await
            .oneshot(sign_out(Some("theme=dark; pathfinder_session=jwt")))
            .await
            .unwrap();

        assert_cleared(&response);
        assert!(revoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn cookie_is_cleared_even_when_the_provider_fails() {
        let provider = Router::new().route(
            "/auth/v1/logout",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

        let response = app(provider)
            .await
            .oneshot(sign_out(Some("pathfinder_session=jwt")))
            .await
            .unwrap();

        assert_cleared(&response);
    }

    #[tokio::test]
    async fn sign_out_without_a_session_still_clears() {
        let response = app(Router::new()).await.oneshot(sign_out(None)).await.unwrap();
        assert_cleared(&response);
    }
}

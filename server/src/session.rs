use cookie::{Cookie, SameSite};
use secrecy::SecretString;
use uuid::Uuid;

/// The signed-in user as the server sees it, including the token reads are made with.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: SecretString,
}

impl UserSession {
    pub fn viewer(&self) -> types::Viewer {
        types::Viewer {
            user_id: self.user_id,
            email: self.email.clone(),
        }
    }
}

/// Pull the session token out of a `Cookie` request header.
pub fn token_from_cookie_header(header: &str, cookie_name: &str) -> Option<SecretString> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}

/// The cookie that carries `token` for `max_age_secs`.
pub fn session_cookie(cookie_name: &str, token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((cookie_name.to_string(), token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::seconds(max_age_secs))
        .build()
}

/// A cookie that removes the session from the browser.
pub fn expired_cookie(cookie_name: &str) -> Cookie<'static> {
    Cookie::build((cookie_name.to_string(), ""))
        .path("/")
        .http_only(true)
        .max_age(cookie::time::Duration::ZERO)
        .build()
}

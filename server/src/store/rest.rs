use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use types::{Error, Result};
use url::Url;

use super::{DataStore, Query};

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self, table: &str) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self, table: &str) -> Result<T> {
        let response = self
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::query_failed(table, e))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::query_failed(table, e))?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!(table, %error, "failed to decode rows");
            Error::query_failed(table, error)
        })
    }
}

/// REST client for the hosted database, acting as one signed-in user so row-level
/// security applies to every read.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    access_token: SecretString,
}

impl StoreClient {
    pub fn new(client: Client, base_url: Url, api_key: SecretString, access_token: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
            access_token,
        }
    }

    fn get(&self, table: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(&format!("/rest/v1/{table}"))
            .map_err(|e| Error::query_failed(table, e))?;

        Ok(self
            .client
            .get(url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.access_token.expose_secret()))
    }
}

impl DataStore for StoreClient {
    async fn fetch_many<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>> {
        self.get(query.table)?
            .query(&query.params())
            .try_send(query.table)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{Json, Router, extract::Query as Params, http::HeaderMap, routing::get};
    use reqwest::StatusCode;
    use serde_json::{Value, json};

    use super::*;
    use crate::test_support::{closed_port, serve};

    fn store(base_url: Url) -> StoreClient {
        StoreClient::new(
            Client::new(),
            base_url,
            "anon".to_string().into(),
            "jwt".to_string().into(),
        )
    }

    #[tokio::test]
    async fn transport_failure_keeps_its_cause() {
        let err = store(closed_port().await)
            .fetch_many::<Value>(&Query::table("profiles"))
            .await
            .unwrap_err();

        let Error::QueryFailed { table, message } = &err else {
            panic!("expected a failed query, got {err:?}");
        };
        assert_eq!(table, "profiles");
        assert!(message.starts_with("error sending request"), "{message}");
        assert!(message.to_lowercase().contains("refused"), "{message}");
    }

    #[tokio::test]
    async fn server_error_is_a_failed_query() {
        let base = serve(Router::new().route(
            "/rest/v1/roadmaps",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let err = store(base)
            .fetch_many::<Value>(&Query::table("roadmaps"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::QueryFailed { ref table, ref message } if table == "roadmaps" && message.contains("500")),
            "{err}"
        );
    }

    #[tokio::test]
    async fn reads_send_keys_and_filters() {
        let base = serve(Router::new().route(
            "/rest/v1/profiles",
            get(
                |headers: HeaderMap, Params(params): Params<HashMap<String, String>>| async move {
                    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
                    let authorized = header("apikey").as_deref() == Some("anon")
                        && header("authorization").as_deref() == Some("Bearer jwt");
                    let filtered = params.get("user_id").map(String::as_str) == Some("eq.42")
                        && params.get("select").map(String::as_str) == Some("*");

                    if authorized && filtered {
                        (StatusCode::OK, Json(json!([{ "first_name": "Asha" }])))
                    } else {
                        (StatusCode::BAD_REQUEST, Json(json!({ "params": params })))
                    }
                },
            ),
        ))
        .await;

        let rows = store(base)
            .fetch_many::<Value>(&Query::table("profiles").eq("user_id", 42))
            .await
            .unwrap();

        assert_eq!(rows, vec![json!({ "first_name": "Asha" })]);
    }
}

//! Supabase client: PostgREST for the tables, Storage for images.
//!
//! One `reqwest::Client` carries the `apikey` and bearer headers for every
//! call. Table rows are read and written as JSON; single-row responses use
//! the PostgREST object media type so a missing row comes back as 406.

mod inquiries;
mod products;
mod storage;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{StoreError, StoreResult};
use crate::config::SupabaseConfig;

/// Media type asking PostgREST for a single JSON object instead of an array.
const OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// PostgREST code for "JSON object requested, multiple (or no) rows returned".
const NO_ROWS_CODE: &str = "PGRST116";

/// Postgres `unique_violation`.
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Supabase REST and Storage client.
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl SupabaseClient {
    /// Create a new client for the configured project.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &SupabaseConfig) -> StoreResult<Self> {
        let key = config.anon_key.expose_secret();
        let mut headers = HeaderMap::new();

        headers.insert(
            "apikey",
            HeaderValue::from_str(key)
                .map_err(|e| StoreError::Decode(format!("Invalid API key format: {e}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| StoreError::Decode(format!("Invalid API key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            bucket: config.image_bucket.clone(),
        })
    }

    /// URL of a table endpoint.
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// Ask for exactly one row back.
    fn single(builder: RequestBuilder) -> RequestBuilder {
        builder.header(reqwest::header::ACCEPT, OBJECT_MEDIA_TYPE)
    }

    /// Ask for the written row(s) back.
    fn returning(builder: RequestBuilder) -> RequestBuilder {
        builder.header("Prefer", "return=representation")
    }

    /// Send a request and decode a JSON body.
    async fn fetch<T: DeserializeOwned>(builder: RequestBuilder, what: &str) -> StoreResult<T> {
        let response = Self::check(builder.send().await?, what).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Send a request and discard the body.
    async fn execute(builder: RequestBuilder, what: &str) -> StoreResult<()> {
        Self::check(builder.send().await?, what).await?;
        Ok(())
    }

    /// Map a non-success response to a `StoreError`.
    async fn check(response: Response, what: &str) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_error(status, &body, what))
    }
}

/// Turn a PostgREST error status and body into a `StoreError`.
fn classify_error(status: StatusCode, body: &str, what: &str) -> StoreError {
    let parsed: PostgrestError = serde_json::from_str(body).unwrap_or_default();
    let code = parsed.code.as_deref().unwrap_or_default();

    if status == StatusCode::NOT_ACCEPTABLE || code == NO_ROWS_CODE {
        return StoreError::NotFound(what.to_string());
    }

    let message = parsed
        .message
        .map(|m| {
            let mut m = m;
            if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
                m = format!("{m} ({details})");
            }
            if let Some(hint) = parsed.hint.filter(|h| !h.is_empty()) {
                m = format!("{m} [hint: {hint}]");
            }
            m
        })
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::CONFLICT || code == UNIQUE_VIOLATION_CODE {
        return StoreError::Conflict(message);
    }

    StoreError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_no_rows() {
        let body = r#"{"code":"PGRST116","message":"JSON object requested, multiple (or no) rows returned","details":"The result contains 0 rows","hint":null}"#;
        let err = classify_error(StatusCode::NOT_ACCEPTABLE, body, "product x");
        assert!(matches!(err, StoreError::NotFound(what) if what == "product x"));
    }

    #[test]
    fn test_classify_unique_violation() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint \"products_slug_key\"","details":"Key (slug)=(table) already exists.","hint":null}"#;
        let err = classify_error(StatusCode::CONFLICT, body, "product");
        match err {
            StoreError::Conflict(message) => {
                assert!(message.contains("duplicate key"));
                assert!(message.contains("already exists"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_api_error_keeps_backend_message() {
        let body = r#"{"code":"42501","message":"permission denied for table products","details":null,"hint":null}"#;
        let err = classify_error(StatusCode::UNAUTHORIZED, body, "products");
        match err {
            StoreError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "permission denied for table products");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_non_json_body() {
        let err = classify_error(StatusCode::BAD_GATEWAY, "upstream down", "products");
        assert!(matches!(err, StoreError::Api { status: 502, message } if message == "upstream down"));
    }
}

//! reqwest-backed transport and shared response checks.
//!
//! Centralizes status handling (401/403 → [`ClientError::Unauthorized`],
//! non-success → [`ClientError::Api`] carrying the backend's `error`
//! message) so endpoint modules stay focused on paths and envelopes.

use std::time::Duration;

use campus_config::ApiConfig;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde_json::Value;

use crate::error::ClientError;
use crate::request::{ApiRequest, Method};
use crate::transport::Transport;

/// Transport that sends requests to the configured backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    cookie: Option<String>,
}

impl HttpTransport {
    /// Build a transport from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is not http(s), or
    /// [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        config
            .validate()
            .map_err(|error| ClientError::InvalidUrl(error.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            cookie: config.cookie_header(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, request.target());
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie);
        }

        match &request.body {
            Some(body) => builder.json(body),
            None if request.method.is_mutating() => {
                builder.header(CONTENT_TYPE, "application/json")
            }
            None => builder,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        tracing::debug!(%request, "sending admin api request");
        let resp = check_response(self.build(&request).send().await?).await?;
        decode_body(&resp.text().await?)
    }
}

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **401 / 403** → [`ClientError::Unauthorized`]
/// - **Non-success status** → [`ClientError::Api`] with the `error` field of
///   a JSON body, falling back to the raw body text, then the status reason.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == 401 || status == 403 {
        return Err(ClientError::Unauthorized {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Extract a human message from an error body (`{ "error": "..." }`).
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Decode a success body; an empty body is `Null`.
pub(crate) fn decode_body(body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn error_message_reads_error_key() {
        assert_eq!(
            error_message(r#"{"error":"University not found"}"#).as_deref(),
            Some("University not found")
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_text() {
        assert_eq!(
            error_message("<h1>Bad Gateway</h1>").as_deref(),
            Some("<h1>Bad Gateway</h1>")
        );
        assert_eq!(error_message("   "), None);
    }

    #[test]
    fn error_message_ignores_json_without_message() {
        assert_eq!(error_message(r#"{"code":7}"#), None);
    }

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(decode_body("{oops"), Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401, "")).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized { status: 401 }));
        let err = check_response(mock_response(403, "")).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized { status: 403 }));
    }

    #[tokio::test]
    async fn check_response_api_error_with_backend_message() {
        let resp = mock_response(400, r#"{"error":"Code is required"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Code is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_api_error_without_body_uses_reason() {
        let err = check_response(mock_response(500, "")).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[test]
    fn from_config_rejects_bad_base_url() {
        let config = ApiConfig {
            base_url: "localhost:5000".into(),
            ..Default::default()
        };
        assert!(matches!(
            HttpTransport::from_config(&config),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn from_config_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:5000/".into(),
            ..Default::default()
        };
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.base_url(), "http://127.0.0.1:5000");
    }
}

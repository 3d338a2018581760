//! Admin REST backend connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Cookie name the backend issues its session under.
const DEFAULT_COOKIE_NAME: &str = "session";

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("campus-console/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://chatbot.univ-batna2.dz`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Session cookie issued by the backend login page. Either a bare value
    /// or a full `name=value` pair.
    #[serde(default)]
    pub session_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            session_cookie: String::new(),
        }
    }
}

impl ApiConfig {
    /// Whether a session cookie is available to authenticate requests.
    pub fn has_session(&self) -> bool {
        !self.session_cookie.trim().is_empty()
    }

    /// Value for the `Cookie` request header, if a session is configured.
    pub fn cookie_header(&self) -> Option<String> {
        let cookie = self.session_cookie.trim();
        if cookie.is_empty() {
            None
        } else if cookie.contains('=') {
            Some(cookie.to_string())
        } else {
            Some(format!("{DEFAULT_COOKIE_NAME}={cookie}"))
        }
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject values the HTTP client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: format!("'{base}' must start with http:// or https://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

//! # campus-client
//!
//! REST client for the campus admin backend.
//!
//! Endpoint methods live on [`CampusClient`], one module per resource:
//! - `/auth/me`, `/auth/logout`
//! - `/admin/system-stats`, `/admin/dashboard/stats`
//! - `/admin/universities`, `/admin/faculties`, `/admin/departments`
//! - `/admin/users`, `/admin/admins`
//!
//! The client is generic over a [`Transport`]. [`HttpTransport`] is the
//! reqwest implementation; the `test-support` feature adds
//! `testing::ScriptedTransport` for in-memory tests.

pub mod admins;
pub mod auth;
pub mod departments;
pub mod faculties;
pub mod stats;
pub mod universities;
pub mod users;

mod envelope;
mod error;
mod http;
mod request;
mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::ClientError;
pub use http::{HttpTransport, check_response};
pub use request::{ApiRequest, Method};
pub use transport::Transport;

use serde_json::Value;

/// Form payload sent with POST/PUT requests.
pub type Payload = serde_json::Map<String, Value>;

// ── Types ──────────────────────────────────────────────────────────

/// Outcome of a successful create/update/delete call.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    /// The backend's `message` field, when it sends one.
    pub message: Option<String>,
    /// The full response body.
    pub body: Value,
}

impl Mutation {
    fn from_body(body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { message, body }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Typed access to the admin REST API over some [`Transport`].
#[derive(Debug, Clone)]
pub struct CampusClient<T> {
    transport: T,
}

impl<T: Transport> CampusClient<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let label = request.to_string();
        let result = self.transport.send(request).await;
        if let Err(error) = &result {
            tracing::debug!(request = %label, %error, "admin api request failed");
        }
        result
    }

    async fn mutate(&self, request: ApiRequest) -> Result<Mutation, ClientError> {
        self.call(request).await.map(Mutation::from_body)
    }
}

impl CampusClient<HttpTransport> {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP transport cannot be built.
    pub fn from_config(config: &campus_config::ApiConfig) -> Result<Self, ClientError> {
        HttpTransport::from_config(config).map(Self::new)
    }
}

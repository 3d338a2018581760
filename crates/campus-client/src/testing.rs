//! Scripted in-memory transport for tests.
//!
//! Responses are keyed by method and full target (path plus query string)
//! and can be served any number of times. Every request is recorded, in
//! order, so tests can assert on exactly what went over the "wire".

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::error::ClientError;
use crate::request::{ApiRequest, Method};
use crate::transport::Transport;

#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Fail { status: u16, message: String },
    Unauthorized,
}

#[derive(Debug, Default)]
struct Inner {
    routes: Vec<(Method, String, Scripted)>,
    requests: Vec<ApiRequest>,
}

/// A [`Transport`] that answers from a script and records every call.
///
/// Clones share the same script and request log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn script(self, method: Method, target: &str, response: Scripted) -> Self {
        {
            let mut inner = self.lock();
            inner
                .routes
                .retain(|(m, t, _)| !(*m == method && t == target));
            inner.routes.push((method, target.to_string(), response));
        }
        self
    }

    /// Answer `method target` with a JSON body. Replaces an earlier script
    /// for the same route.
    #[must_use]
    pub fn on(self, method: Method, target: &str, body: Value) -> Self {
        self.script(method, target, Scripted::Json(body))
    }

    /// Answer `method target` with a non-success status and `{ error }` message.
    #[must_use]
    pub fn fail(self, method: Method, target: &str, status: u16, message: &str) -> Self {
        self.script(
            method,
            target,
            Scripted::Fail {
                status,
                message: message.to_string(),
            },
        )
    }

    /// Answer `method target` with 401.
    #[must_use]
    pub fn unauthorized(self, method: Method, target: &str) -> Self {
        self.script(method, target, Scripted::Unauthorized)
    }

    /// Re-script a route on a shared handle (e.g. after the controller owns a clone).
    pub fn set(&self, method: Method, target: &str, body: Value) {
        let _ = self.clone().on(method, target, body);
    }

    /// Every request sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    /// `METHOD target` labels of every request sent so far.
    #[must_use]
    pub fn request_log(&self) -> Vec<String> {
        self.lock().requests.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    fn respond(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let target = request.target();
        let method = request.method;
        let mut inner = self.lock();
        inner.requests.push(request);
        let scripted = inner
            .routes
            .iter()
            .find(|(m, t, _)| *m == method && *t == target)
            .map(|(_, _, response)| response.clone());

        match scripted {
            Some(Scripted::Json(body)) => Ok(body),
            Some(Scripted::Fail { status, message }) => Err(ClientError::Api { status, message }),
            Some(Scripted::Unauthorized) => Err(ClientError::Unauthorized { status: 401 }),
            None => Err(ClientError::Api {
                status: 404,
                message: format!("no scripted response for {method} {target}"),
            }),
        }
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        self.respond(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn unscripted_route_is_404() {
        let transport = ScriptedTransport::new();
        let err = transport.send(ApiRequest::get("/nope")).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
        assert_eq!(transport.request_log(), vec!["GET /nope"]);
    }

    #[tokio::test]
    async fn later_script_replaces_earlier() {
        let transport = ScriptedTransport::new().on(Method::Get, "/x", json!(1));
        transport.set(Method::Get, "/x", json!(2));
        assert_eq!(transport.send(ApiRequest::get("/x")).await.unwrap(), json!(2));
    }

    #[tokio::test]
    async fn clones_share_the_log() {
        let transport = ScriptedTransport::new().on(Method::Get, "/x", json!({}));
        let clone = transport.clone();
        clone.send(ApiRequest::get("/x")).await.unwrap();
        assert_eq!(transport.requests().len(), 1);
        transport.clear_requests();
        assert!(clone.requests().is_empty());
    }
}

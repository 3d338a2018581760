//! The seam between endpoint methods and the wire.
//!
//! [`HttpTransport`](crate::http::HttpTransport) talks to the real backend;
//! the `test-support` feature adds a scripted in-memory implementation.

use std::future::Future;

use serde_json::Value;

use crate::error::ClientError;
use crate::request::ApiRequest;

/// Executes one [`ApiRequest`] and yields the decoded JSON body.
///
/// Implementations map non-success statuses to [`ClientError`]; an empty
/// success body decodes to `Value::Null`.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ClientError>> + Send;
}


//! Response envelope unpacking.
//!
//! The backend wraps every payload in a named key: `{ "universities": [...] }`
//! for collections, `{ "university": {...} }` for single records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Take a collection out of `key`. A missing or null key is an empty list.
pub(crate) fn list<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<Vec<T>, ClientError> {
    match body.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items)
            .map_err(|e| ClientError::Parse(format!("invalid '{key}' list: {e}"))),
    }
}

/// Take a single record out of `key`. A missing key is a parse error.
pub(crate) fn record<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ClientError> {
    let item = body
        .get_mut(key)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or_else(|| ClientError::Parse(format!("response missing '{key}'")))?;
    serde_json::from_value(item).map_err(|e| ClientError::Parse(format!("invalid '{key}': {e}")))
}

/// Take an optional record out of `key`; missing and null both mean `None`.
pub(crate) fn optional<T: DeserializeOwned>(
    mut body: Value,
    key: &str,
) -> Result<Option<T>, ClientError> {
    match body.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(item) => serde_json::from_value(item)
            .map(Some)
            .map_err(|e| ClientError::Parse(format!("invalid '{key}': {e}"))),
    }
}

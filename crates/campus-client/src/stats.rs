//! Dashboard statistics endpoints.

use campus_core::stats::{DashboardStats, SystemStats};

use crate::{ApiRequest, CampusClient, ClientError, Transport};

impl<T: Transport> CampusClient<T> {
    /// `GET /admin/system-stats` for the super-admin cards.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn system_stats(&self) -> Result<SystemStats, ClientError> {
        let body = self.call(ApiRequest::get("/admin/system-stats")).await?;
        parse_stats(body)
    }

    /// `GET /admin/dashboard/stats` for the university-admin cards.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let body = self.call(ApiRequest::get("/admin/dashboard/stats")).await?;
        parse_stats(body)
    }
}

/// Stats come either bare or wrapped in a `stats` key.
fn parse_stats<S: serde::de::DeserializeOwned + Default>(
    mut body: serde_json::Value,
) -> Result<S, ClientError> {
    if body.is_null() {
        return Ok(S::default());
    }
    let inner = match body.get_mut("stats") {
        Some(stats) if stats.is_object() => stats.take(),
        _ => body,
    };
    serde_json::from_value(inner).map_err(|e| ClientError::Parse(format!("invalid stats: {e}")))
}

#[cfg(test)]
mod tests {
    use campus_core::stats::SystemStats;
    use serde_json::json;

    use super::parse_stats;

    #[test]
    fn parses_bare_stats() {
        let stats: SystemStats = parse_stats(json!({"users_count": 12})).unwrap();
        assert_eq!(stats.users_count, 12);
    }

    #[test]
    fn parses_wrapped_stats() {
        let stats: SystemStats = parse_stats(json!({"stats": {"admins_count": 2}})).unwrap();
        assert_eq!(stats.admins_count, 2);
    }

    #[test]
    fn null_body_is_all_zero() {
        let stats: SystemStats = parse_stats(serde_json::Value::Null).unwrap();
        assert_eq!(stats, SystemStats::default());
    }
}

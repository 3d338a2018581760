use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// The signed-in user as reported by `GET /auth/me`.
///
/// Produced by session bootstrap and owned by the controller's session
/// context for one page view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    /// Set for university-scoped administrators.
    #[serde(default)]
    pub university_id: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    /// Name shown in the dashboard header: full name, then username, then email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [&self.full_name, &self.username, &self.email]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .find(|value| !value.trim().is_empty())
            .unwrap_or("Admin")
    }
}

//! Count payloads behind the dashboard statistics cards.
//!
//! Every counter defaults to 0 when the backend omits it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response of `GET /admin/system-stats` (super-admin page).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SystemStats {
    #[serde(default)]
    pub universities_count: u64,
    #[serde(default)]
    pub faculties_count: u64,
    #[serde(default)]
    pub departments_count: u64,
    #[serde(default)]
    pub users_count: u64,
    #[serde(default)]
    pub admins_count: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of `GET /admin/dashboard/stats` (university-admin page).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub faculties_count: u64,
    #[serde(default)]
    pub departments_count: u64,
    #[serde(default)]
    pub users_count: u64,
    #[serde(default)]
    pub active_users_count: u64,
    #[serde(default)]
    pub pending_users_count: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

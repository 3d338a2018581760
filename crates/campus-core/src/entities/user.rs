use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Relation;
use crate::enums::{Role, UserStatus};

/// A platform account from `/admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

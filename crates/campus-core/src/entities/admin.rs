use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Relation;
use crate::enums::Role;

/// An administrator account from `/admin/admins`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Admin {
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
    pub university_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Admin {
    #[must_use]
    pub fn scoped_university_id(&self) -> Option<i64> {
        self.university_id
            .or_else(|| self.university.as_ref().map(Relation::id))
    }
}

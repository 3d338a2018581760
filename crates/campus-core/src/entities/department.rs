use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Relation;

/// A department record from `/admin/departments`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Department {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_of_department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_count: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Department {
    #[must_use]
    pub fn owner_university_id(&self) -> Option<i64> {
        self.university_id
            .or_else(|| self.university.as_ref().map(Relation::id))
    }

    #[must_use]
    pub fn owner_faculty_id(&self) -> Option<i64> {
        self.faculty_id
            .or_else(|| self.faculty.as_ref().map(Relation::id))
    }
}

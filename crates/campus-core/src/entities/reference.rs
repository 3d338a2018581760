use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimal `{ id, name }` projection of a related record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A relational reference that the backend sends either embedded or as a
/// bare id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Relation {
    Record(EntityRef),
    Id(i64),
}

impl Relation {
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Record(record) => record.id,
            Self::Id(id) => *id,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Record(record) => record.name.as_deref(),
            Self::Id(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_record() {
        let relation: Relation = serde_json::from_str(r#"{"id":4,"name":"Batna 2"}"#).unwrap();
        assert_eq!(relation.id(), 4);
        assert_eq!(relation.name(), Some("Batna 2"));
    }

    #[test]
    fn parses_bare_id() {
        let relation: Relation = serde_json::from_str("7").unwrap();
        assert_eq!(relation, Relation::Id(7));
        assert_eq!(relation.name(), None);
    }
}

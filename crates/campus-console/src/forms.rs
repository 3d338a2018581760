//! Entity forms: field layout, population from records, payload typing.
//!
//! A [`FormState`] holds raw input strings, the way form inputs do. It is
//! turned into a JSON payload only on submit, where `is_active` becomes a
//! bool, `*_id` fields become integers and empty optional fields are left
//! out.

use std::collections::BTreeMap;
use std::fmt;

use campus_client::Payload;
use campus_core::enums::{Role, Tab};
use serde::Serialize;
use serde_json::Value;

/// Which entity a form edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    University,
    Faculty,
    Department,
    Admin,
}

impl FormKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::University => "university",
            Self::Faculty => "faculty",
            Self::Department => "department",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Faculty => "Faculty",
            Self::Department => "Department",
            Self::Admin => "Admin",
        }
    }

    /// The tab whose table this form feeds.
    #[must_use]
    pub const fn tab(self) -> Tab {
        match self {
            Self::University => Tab::Universities,
            Self::Faculty => Tab::Faculties,
            Self::Department => Tab::Departments,
            Self::Admin => Tab::Admins,
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::University => UNIVERSITY_FIELDS,
            Self::Faculty => FACULTY_FIELDS,
            Self::Department => DEPARTMENT_FIELDS,
            Self::Admin => ADMIN_FIELDS,
        }
    }

    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Bool,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldType,
    pub required: bool,
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldType::Text,
        required: false,
    }
}

const fn required(mut spec: FieldSpec) -> FieldSpec {
    spec.required = true;
    spec
}

const fn id(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldType::Integer,
        required: false,
    }
}

const ACTIVE: FieldSpec = FieldSpec {
    name: "is_active",
    label: "Active",
    kind: FieldType::Bool,
    required: false,
};

const UNIVERSITY_FIELDS: &[FieldSpec] = &[
    required(text("name", "Name")),
    text("name_ar", "Name (Arabic)"),
    text("name_fr", "Name (French)"),
    required(text("code", "Code")),
    text("city", "City"),
    text("address", "Address"),
    text("website", "Website"),
    text("email", "Email"),
    text("phone", "Phone"),
    ACTIVE,
];

const FACULTY_FIELDS: &[FieldSpec] = &[
    required(text("name", "Name")),
    text("name_ar", "Name (Arabic)"),
    text("name_fr", "Name (French)"),
    required(text("code", "Code")),
    id("university_id", "University"),
    text("dean", "Dean"),
    text("email", "Email"),
    text("phone", "Phone"),
    text("building", "Building"),
    text("official_website", "Website"),
    text("description", "Description"),
    ACTIVE,
];

const DEPARTMENT_FIELDS: &[FieldSpec] = &[
    required(text("name", "Name")),
    text("name_ar", "Name (Arabic)"),
    text("name_fr", "Name (French)"),
    required(text("code", "Code")),
    id("university_id", "University"),
    id("faculty_id", "Faculty"),
    text("head_of_department", "Head of Department"),
    text("email", "Email"),
    text("phone", "Phone"),
    text("building", "Building"),
    text("official_website", "Website"),
    text("description", "Description"),
    ACTIVE,
];

const ADMIN_FIELDS: &[FieldSpec] = &[
    required(text("username", "Username")),
    text("full_name", "Full Name"),
    required(text("email", "Email")),
    FieldSpec {
        name: "password",
        label: "Password",
        kind: FieldType::Password,
        required: false,
    },
    required(text("role", "Role")),
    id("university_id", "University"),
    ACTIVE,
];

/// Add vs. edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum FormMode {
    Add,
    Edit(i64),
}

impl FormMode {
    #[must_use]
    pub const fn id(self) -> Option<i64> {
        match self {
            Self::Add => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Why a form could not be turned into a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    Missing(&'static str),
    NotANumber(&'static str),
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(label) => write!(f, "{label} is required"),
            Self::NotANumber(label) => write!(f, "{label} must be a number"),
        }
    }
}

/// An open form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub kind: FormKind,
    pub mode: FormMode,
    /// Raw input values by field name. Every field of the kind is present.
    pub fields: BTreeMap<String, String>,
}

impl FormState {
    /// An empty form. `is_active` starts checked.
    #[must_use]
    pub fn empty(kind: FormKind) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|spec| {
                let value = if spec.kind == FieldType::Bool { "true" } else { "" };
                (spec.name.to_string(), value.to_string())
            })
            .collect();
        Self {
            kind,
            mode: FormMode::Add,
            fields,
        }
    }

    /// A form filled from a fetched record.
    ///
    /// Passwords are never filled in. An empty `*_id` field falls back to the
    /// embedded relation (`university`, `faculty`), object or bare id.
    #[must_use]
    pub fn populated(kind: FormKind, id: i64, record: &Value) -> Self {
        let mut form = Self::empty(kind);
        form.mode = FormMode::Edit(id);
        for spec in kind.fields() {
            if spec.kind == FieldType::Password {
                continue;
            }
            let mut value = record.get(spec.name).map(input_value).unwrap_or_default();
            if value.is_empty() && spec.kind == FieldType::Integer {
                if let Some(relation) = spec.name.strip_suffix("_id").and_then(|r| record.get(r)) {
                    value = relation.get("id").map_or_else(|| input_value(relation), input_value);
                }
            }
            if spec.kind == FieldType::Bool && value.is_empty() {
                value = "false".into();
            }
            form.fields.insert(spec.name.to_string(), value);
        }
        form
    }

    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Whether the admin university selector is shown.
    #[must_use]
    pub fn university_visible(&self) -> bool {
        if self.kind != FormKind::Admin {
            return self.kind.field("university_id").is_some();
        }
        self.value("role")
            .parse::<Role>()
            .is_ok_and(Role::requires_university_scope)
    }

    fn included(&self, spec: &FieldSpec) -> bool {
        !(self.kind == FormKind::Admin && spec.name == "university_id" && !self.university_visible())
    }

    fn is_required(&self, spec: &FieldSpec) -> bool {
        if spec.required {
            return true;
        }
        match (self.kind, spec.name) {
            (FormKind::Admin, "password") => self.mode == FormMode::Add,
            (FormKind::Admin, "university_id") => self.university_visible(),
            (FormKind::Faculty | FormKind::Department, "university_id") | (FormKind::Department, "faculty_id") => {
                true
            }
            _ => false,
        }
    }

    /// Validate and serialize the form.
    ///
    /// # Errors
    ///
    /// Returns the first [`Invalid`] field in form order.
    pub fn payload(&self) -> Result<Payload, Invalid> {
        let mut payload = Payload::new();
        for spec in self.kind.fields() {
            if !self.included(spec) {
                continue;
            }
            let raw = self.value(spec.name).trim();
            if raw.is_empty() {
                if self.is_required(spec) {
                    return Err(Invalid::Missing(spec.label));
                }
                if spec.kind != FieldType::Bool {
                    continue;
                }
            }
            let value = match spec.kind {
                FieldType::Text => Value::from(raw),
                // Passwords are sent exactly as typed.
                FieldType::Password => Value::from(self.value(spec.name)),
                FieldType::Integer => raw
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| Invalid::NotANumber(spec.label))?,
                FieldType::Bool => Value::Bool(is_checked(raw)),
            };
            payload.insert(spec.name.to_string(), value);
        }
        Ok(payload)
    }
}

fn input_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_checked(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn set(form: &mut FormState, pairs: &[(&str, &str)]) {
        for (name, value) in pairs {
            form.fields.insert((*name).to_string(), (*value).to_string());
        }
    }

    #[test]
    fn empty_form_has_every_field_and_active_checked() {
        let form = FormState::empty(FormKind::Department);
        assert_eq!(form.fields.len(), DEPARTMENT_FIELDS.len());
        assert_eq!(form.value("is_active"), "true");
        assert_eq!(form.value("name"), "");
        assert_eq!(form.mode, FormMode::Add);
    }

    #[test]
    fn payload_types_fields_and_omits_empty_optionals() {
        let mut form = FormState::empty(FormKind::Faculty);
        set(
            &mut form,
            &[("name", "Sciences"), ("code", "FS"), ("university_id", "4"), ("is_active", "false")],
        );
        let payload = form.payload().unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"name": "Sciences", "code": "FS", "university_id": 4, "is_active": false})
        );
    }

    #[test]
    fn missing_required_field_is_reported_by_label() {
        let mut form = FormState::empty(FormKind::University);
        set(&mut form, &[("name", "Batna")]);
        assert_eq!(form.payload().unwrap_err(), Invalid::Missing("Code"));
        assert_eq!(Invalid::Missing("Code").to_string(), "Code is required");
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let mut form = FormState::empty(FormKind::Department);
        set(
            &mut form,
            &[("name", "CS"), ("code", "CS"), ("university_id", "x"), ("faculty_id", "2")],
        );
        assert_eq!(form.payload().unwrap_err(), Invalid::NotANumber("University"));
    }

    #[test]
    fn admin_password_required_only_when_adding() {
        let mut form = FormState::empty(FormKind::Admin);
        set(&mut form, &[("username", "root"), ("email", "r@x.dz"), ("role", "admin")]);
        assert_eq!(form.payload().unwrap_err(), Invalid::Missing("Password"));

        form.mode = FormMode::Edit(5);
        let payload = form.payload().unwrap();
        assert!(!payload.contains_key("password"));
        assert!(!payload.contains_key("university_id"));
    }

    #[test]
    fn admin_university_follows_role() {
        let mut form = FormState::empty(FormKind::Admin);
        set(
            &mut form,
            &[("username", "u"), ("email", "u@x.dz"), ("password", "pw"), ("role", "admin"), ("university_id", "3")],
        );
        assert!(!form.university_visible());
        assert!(!form.payload().unwrap().contains_key("university_id"));

        set(&mut form, &[("role", "university_admin"), ("university_id", "")]);
        assert!(form.university_visible());
        assert_eq!(form.payload().unwrap_err(), Invalid::Missing("University"));

        set(&mut form, &[("university_id", "3")]);
        assert_eq!(form.payload().unwrap()["university_id"], json!(3));
    }

    #[test]
    fn populated_reads_relations_and_skips_password() {
        let record = json!({
            "id": 8, "name": "CS", "code": "CS", "university": {"id": 1, "name": "Batna"},
            "faculty": 3, "is_active": true, "password": "hash"
        });
        let form = FormState::populated(FormKind::Department, 8, &record);
        assert_eq!(form.mode, FormMode::Edit(8));
        assert_eq!(form.value("university_id"), "1");
        assert_eq!(form.value("faculty_id"), "3");
        assert_eq!(form.value("is_active"), "true");
        assert_eq!(form.value("description"), "");

        let admin = FormState::populated(FormKind::Admin, 2, &json!({"username": "a", "password": "hash"}));
        assert_eq!(admin.value("password"), "");
        assert_eq!(admin.value("is_active"), "false");
    }
}

//! Roles, user statuses, dashboards and tabs.
//!
//! All enums use `snake_case` serialization. `Dashboard` carries the page
//! policy (allowed roles, tab order); `Tab` names the panels a dashboard
//! can switch between.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    UniversityAdmin,
    Student,
    /// Any role string this client does not know about.
    #[serde(other)]
    Other,
}

impl Role {
    /// Roles that can be assigned through the admin form.
    pub const ADMIN_ROLES: [Self; 3] = [Self::SuperAdmin, Self::Admin, Self::UniversityAdmin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::UniversityAdmin => "university_admin",
            Self::Student => "student",
            Self::Other => "other",
        }
    }

    /// Whether an account with this role is bound to one university.
    #[must_use]
    pub const fn requires_university_scope(self) -> bool {
        matches!(self, Self::UniversityAdmin)
    }

    /// Human label used in table badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::UniversityAdmin => "University Admin",
            Self::Student => "Student",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "university_admin" => Ok(Self::UniversityAdmin),
            "student" => Ok(Self::Student),
            _ => Err(CoreError::InvalidValue {
                field: "role",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// Account status, also used as the users-table filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Pending,
    Inactive,
    Suspended,
    #[serde(other)]
    Other,
}

impl UserStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
            Self::Other => "Unknown",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "inactive" => Ok(Self::Inactive),
            "suspended" => Ok(Self::Suspended),
            _ => Err(CoreError::InvalidValue {
                field: "status",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// A switchable dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Universities,
    Faculties,
    Departments,
    Users,
    Admins,
}

impl Tab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Universities => "universities",
            Self::Faculties => "faculties",
            Self::Departments => "departments",
            Self::Users => "users",
            Self::Admins => "admins",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Universities => "Universities",
            Self::Faculties => "Faculties",
            Self::Departments => "Departments",
            Self::Users => "Users",
            Self::Admins => "Admins",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "universities" | "university" => Ok(Self::Universities),
            "faculties" | "faculty" => Ok(Self::Faculties),
            "departments" | "department" => Ok(Self::Departments),
            "users" | "user" => Ok(Self::Users),
            "admins" | "admin" => Ok(Self::Admins),
            _ => Err(CoreError::InvalidValue {
                field: "tab",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Which admin page the console is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dashboard {
    /// System-wide administration.
    Super,
    /// Administration scoped to the signed-in admin's university.
    University,
}

impl Dashboard {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Super => "super",
            Self::University => "university",
        }
    }

    /// Roles allowed to open this page. Anyone else is sent to login.
    #[must_use]
    pub const fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Super => &[Role::SuperAdmin],
            Self::University => &[Role::UniversityAdmin],
        }
    }

    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Tabs in display order. The first one is active on load.
    #[must_use]
    pub const fn tabs(self) -> &'static [Tab] {
        match self {
            Self::Super => &[
                Tab::Universities,
                Tab::Faculties,
                Tab::Departments,
                Tab::Users,
                Tab::Admins,
            ],
            Self::University => &[Tab::Faculties, Tab::Departments, Tab::Users],
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dashboard {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "super" | "super_admin" => Ok(Self::Super),
            "university" | "university_admin" => Ok(Self::University),
            _ => Err(CoreError::InvalidValue {
                field: "dashboard",
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn unknown_role_deserializes_to_other() {
        let role: Role = serde_json::from_str("\"librarian\"").unwrap();
        assert_eq!(role, Role::Other);
    }

    #[rstest]
    #[case(Role::SuperAdmin, false)]
    #[case(Role::Admin, false)]
    #[case(Role::UniversityAdmin, true)]
    #[case(Role::Student, false)]
    fn university_scope_only_for_university_admins(#[case] role: Role, #[case] scoped: bool) {
        assert_eq!(role.requires_university_scope(), scoped);
    }

    #[rstest]
    #[case("super-admin", Role::SuperAdmin)]
    #[case("ADMIN", Role::Admin)]
    #[case("university_admin", Role::UniversityAdmin)]
    fn role_parses_loosely(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>().unwrap(), expected);
    }

    #[test]
    fn role_parse_rejects_unknown() {
        let err = "dean".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("invalid role 'dean'"));
    }

    #[test]
    fn dashboards_allow_only_their_role() {
        assert!(Dashboard::Super.allows(Role::SuperAdmin));
        assert!(!Dashboard::Super.allows(Role::UniversityAdmin));
        assert!(Dashboard::University.allows(Role::UniversityAdmin));
        assert!(!Dashboard::University.allows(Role::Admin));
        assert!(!Dashboard::University.allows(Role::Other));
    }

    #[test]
    fn super_dashboard_has_five_tabs_starting_with_universities() {
        let tabs = Dashboard::Super.tabs();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0], Tab::Universities);
        assert!(!Dashboard::University.tabs().contains(&Tab::Universities));
    }

    #[test]
    fn tab_accepts_singular_alias() {
        assert_eq!("faculty".parse::<Tab>().unwrap(), Tab::Faculties);
        assert!("overview".parse::<Tab>().is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&UserStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!("Suspended".parse::<UserStatus>().unwrap(), UserStatus::Suspended);
    }
}

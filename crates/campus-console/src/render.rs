//! Row templates: one pure function per entity table.
//!
//! Each `*_row` maps a backend record to a [`RowViewModel`]. Missing text
//! renders as `-`, missing counters as `0`, a missing `is_active` as
//! "Inactive".

use campus_core::entities::{Admin, Department, Faculty, Relation, University, User};
use campus_core::enums::{Role, Tab, UserStatus};

use crate::view::{Cell, RowAction, RowViewModel, TableView, Tone};

pub const UNIVERSITY_COLUMNS: &[&str] = &[
    "Name",
    "Code",
    "City",
    "Faculties",
    "Departments",
    "Users",
    "Status",
    "Actions",
];
pub const FACULTY_COLUMNS: &[&str] = &["Name", "Code", "University", "Dean", "Departments", "Status", "Actions"];
pub const DEPARTMENT_COLUMNS: &[&str] = &["Name", "Code", "Faculty", "University", "Head", "Status", "Actions"];
pub const USER_COLUMNS: &[&str] = &["Username", "Full Name", "Email", "Role", "University", "Status", "Joined"];
pub const ADMIN_COLUMNS: &[&str] = &["Username", "Full Name", "Email", "Role", "University", "Status", "Actions"];

const EDIT_DELETE: &[RowAction] = &[RowAction::Edit, RowAction::Delete];
const EDIT_ONLY: &[RowAction] = &[RowAction::Edit];

#[must_use]
pub const fn columns(tab: Tab) -> &'static [&'static str] {
    match tab {
        Tab::Universities => UNIVERSITY_COLUMNS,
        Tab::Faculties => FACULTY_COLUMNS,
        Tab::Departments => DEPARTMENT_COLUMNS,
        Tab::Users => USER_COLUMNS,
        Tab::Admins => ADMIN_COLUMNS,
    }
}

/// Placeholder text shown when a collection comes back empty.
#[must_use]
pub const fn empty_message(tab: Tab) -> &'static str {
    match tab {
        Tab::Universities => "No universities found",
        Tab::Faculties => "No faculties found",
        Tab::Departments => "No departments found",
        Tab::Users => "No users found",
        Tab::Admins => "No admins found",
    }
}

fn relation_name(relation: Option<&Relation>) -> Cell {
    Cell::text(relation.and_then(Relation::name))
}

#[must_use]
pub fn university_row(university: &University) -> RowViewModel {
    RowViewModel {
        id: university.id,
        cells: vec![
            Cell::text(university.name.as_deref()),
            Cell::text(university.code.as_deref()),
            Cell::text(university.city.as_deref()),
            Cell::count(university.faculties_count),
            Cell::count(university.departments_count),
            Cell::count(university.users_count),
            Cell::active(university.is_active),
            Cell::actions(EDIT_DELETE),
        ],
    }
}

#[must_use]
pub fn faculty_row(faculty: &Faculty) -> RowViewModel {
    RowViewModel {
        id: faculty.id,
        cells: vec![
            Cell::text(faculty.name.as_deref()),
            Cell::text(faculty.code.as_deref()),
            relation_name(faculty.university.as_ref()),
            Cell::text(faculty.dean.as_deref()),
            Cell::count(faculty.departments_count),
            Cell::active(faculty.is_active),
            Cell::actions(EDIT_ONLY),
        ],
    }
}

#[must_use]
pub fn department_row(department: &Department) -> RowViewModel {
    RowViewModel {
        id: department.id,
        cells: vec![
            Cell::text(department.name.as_deref()),
            Cell::text(department.code.as_deref()),
            relation_name(department.faculty.as_ref()),
            relation_name(department.university.as_ref()),
            Cell::text(department.head_of_department.as_deref()),
            Cell::active(department.is_active),
            Cell::actions(EDIT_ONLY),
        ],
    }
}

fn status_badge(status: Option<UserStatus>) -> Cell {
    let tone = match status {
        Some(UserStatus::Active) => Tone::Success,
        Some(UserStatus::Pending) => Tone::Warning,
        Some(UserStatus::Inactive | UserStatus::Suspended) => Tone::Danger,
        Some(UserStatus::Other) | None => Tone::Neutral,
    };
    match status {
        Some(status) => Cell::badge(status.label(), tone),
        None => Cell::text(None),
    }
}

fn role_badge(role: Option<Role>) -> Cell {
    role.map_or_else(|| Cell::text(None), |role| Cell::badge(role.label(), Tone::Info))
}

/// Users have no row actions: editing users is not available from the
/// dashboards.
#[must_use]
pub fn user_row(user: &User) -> RowViewModel {
    // Only the date part of an ISO timestamp is shown.
    let joined = user
        .created_at
        .as_deref()
        .map(|ts| ts.split('T').next().unwrap_or(ts));
    RowViewModel {
        id: user.id,
        cells: vec![
            Cell::text(user.username.as_deref()),
            Cell::text(user.full_name.as_deref()),
            Cell::text(user.email.as_deref()),
            role_badge(user.role),
            relation_name(user.university.as_ref()),
            status_badge(user.status),
            Cell::text(joined),
        ],
    }
}

#[must_use]
pub fn admin_row(admin: &Admin) -> RowViewModel {
    RowViewModel {
        id: admin.id,
        cells: vec![
            Cell::text(admin.username.as_deref()),
            Cell::text(admin.full_name.as_deref()),
            Cell::text(admin.email.as_deref()),
            role_badge(admin.role),
            relation_name(admin.university.as_ref()),
            Cell::active(admin.is_active),
            Cell::actions(EDIT_DELETE),
        ],
    }
}

/// Render a whole collection into the table for `tab`.
pub fn table<R>(tab: Tab, records: &[R], row: impl Fn(&R) -> RowViewModel) -> TableView {
    let rows = records.iter().map(row).collect();
    TableView::from_rows(columns(tab), rows, empty_message(tab))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::view::TableBody;

    fn plain(row: &RowViewModel) -> Vec<String> {
        row.cells.iter().map(Cell::plain).collect()
    }

    #[test]
    fn university_row_defaults_counts_and_status() {
        let university: University = serde_json::from_value(json!({
            "id": 1, "name": "X", "code": "X1", "city": "C", "is_active": true
        }))
        .unwrap();
        let row = university_row(&university);
        assert_eq!(row.id, 1);
        assert_eq!(plain(&row), vec!["X", "X1", "C", "0", "0", "0", "Active", "edit/delete"]);
        assert_eq!(row.cells[6], Cell::badge("Active", Tone::Success));
    }

    #[test]
    fn faculty_row_reads_embedded_university_name() {
        let faculty: Faculty = serde_json::from_value(json!({
            "id": 3, "name": "Sciences", "university": {"id": 1, "name": "Batna 2"}
        }))
        .unwrap();
        assert_eq!(
            plain(&faculty_row(&faculty)),
            vec!["Sciences", "-", "Batna 2", "-", "0", "Inactive", "edit"]
        );
    }

    #[test]
    fn department_row_with_bare_relation_ids_shows_dashes() {
        let department: Department = serde_json::from_value(json!({
            "id": 9, "name": "CS", "code": "CS", "faculty": 3, "university": 1, "is_active": true
        }))
        .unwrap();
        assert_eq!(
            plain(&department_row(&department)),
            vec!["CS", "CS", "-", "-", "-", "Active", "edit"]
        );
    }

    #[test]
    fn user_row_trims_timestamp_and_badges_status() {
        let user: User = serde_json::from_value(json!({
            "id": 5, "username": "amina", "role": "student", "status": "pending",
            "created_at": "2024-09-01T10:00:00"
        }))
        .unwrap();
        let row = user_row(&user);
        assert_eq!(
            plain(&row),
            vec!["amina", "-", "-", "Student", "-", "Pending", "2024-09-01"]
        );
        assert_eq!(row.cells[5], Cell::badge("Pending", Tone::Warning));
    }

    #[test]
    fn admin_row_shows_role_label() {
        let admin: Admin = serde_json::from_value(json!({
            "id": 2, "username": "root", "role": "university_admin", "is_active": false
        }))
        .unwrap();
        assert_eq!(
            plain(&admin_row(&admin)),
            vec!["root", "-", "-", "University Admin", "-", "Inactive", "edit/delete"]
        );
    }

    #[test]
    fn empty_collection_spans_all_columns() {
        let view = table::<Admin>(Tab::Admins, &[], admin_row);
        assert_eq!(
            view.body,
            TableBody::Placeholder {
                message: "No admins found".into(),
                colspan: ADMIN_COLUMNS.len(),
            }
        );
    }

    #[test]
    fn every_row_matches_its_column_count() {
        let university: University = serde_json::from_value(json!({"id": 1})).unwrap();
        let faculty: Faculty = serde_json::from_value(json!({"id": 1})).unwrap();
        let department: Department = serde_json::from_value(json!({"id": 1})).unwrap();
        let user: User = serde_json::from_value(json!({"id": 1})).unwrap();
        let admin: Admin = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(university_row(&university).cells.len(), UNIVERSITY_COLUMNS.len());
        assert_eq!(faculty_row(&faculty).cells.len(), FACULTY_COLUMNS.len());
        assert_eq!(department_row(&department).cells.len(), DEPARTMENT_COLUMNS.len());
        assert_eq!(user_row(&user).cells.len(), USER_COLUMNS.len());
        assert_eq!(admin_row(&admin).cells.len(), ADMIN_COLUMNS.len());
    }
}

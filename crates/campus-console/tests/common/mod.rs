#![allow(dead_code)]

use campus_client::testing::ScriptedTransport;
use campus_client::{ApiRequest, CampusClient, Method};
use campus_config::ConsoleConfig;
use campus_console::Console;
use campus_core::enums::Dashboard;
use serde_json::{Value, json};

pub fn me(role: &str, university_id: Option<i64>) -> Value {
    json!({
        "user": {
            "id": 1,
            "username": "root",
            "full_name": "Root Admin",
            "email": "root@campus.dz",
            "role": role,
            "university_id": university_id,
        }
    })
}

/// A backend with every collection the super-admin page loads on init.
pub fn super_backend() -> ScriptedTransport {
    ScriptedTransport::new()
        .on(Method::Get, "/auth/me", me("super_admin", None))
        .on(
            Method::Get,
            "/admin/system-stats",
            json!({"universities_count": 1, "faculties_count": 1, "users_count": 2}),
        )
        .on(
            Method::Get,
            "/admin/universities",
            json!({"universities": [{"id": 1, "name": "X", "code": "X1", "city": "C", "is_active": true}]}),
        )
        .on(
            Method::Get,
            "/admin/faculties",
            json!({"faculties": [{"id": 3, "name": "Sciences", "code": "FS", "university": {"id": 1, "name": "X"}, "is_active": true}]}),
        )
        .on(Method::Get, "/admin/departments", json!({"departments": []}))
        .on(
            Method::Get,
            "/admin/users",
            json!({"users": [
                {"id": 10, "username": "amina", "role": "student", "status": "active"},
                {"id": 11, "username": "yacine", "role": "student", "status": "pending"}
            ]}),
        )
        .on(
            Method::Get,
            "/admin/admins",
            json!({"admins": [{"id": 5, "username": "ops", "email": "ops@campus.dz", "role": "admin", "is_active": true}]}),
        )
}

/// A backend for a university admin of university 4.
pub fn university_backend() -> ScriptedTransport {
    ScriptedTransport::new()
        .on(Method::Get, "/auth/me", me("university_admin", Some(4)))
        .on(
            Method::Get,
            "/admin/universities/4",
            json!({"university": {"id": 4, "name": "Batna 2", "code": "UB2"}}),
        )
        .on(
            Method::Get,
            "/admin/dashboard/stats",
            json!({"faculties_count": 2, "pending_users_count": 1}),
        )
        .on(
            Method::Get,
            "/admin/faculties?university_id=4",
            json!({"faculties": [{"id": 7, "name": "Medicine", "university_id": 4}]}),
        )
        .on(
            Method::Get,
            "/admin/departments?university_id=4",
            json!({"departments": [{"id": 8, "name": "Surgery", "faculty": {"id": 7, "name": "Medicine"}}]}),
        )
        .on(Method::Get, "/admin/users?university_id=4", json!({"users": []}))
}

pub fn console(transport: &ScriptedTransport, dashboard: Dashboard) -> Console<ScriptedTransport> {
    let config = ConsoleConfig {
        dashboard,
        ..ConsoleConfig::default()
    };
    Console::new(CampusClient::new(transport.clone()), &config)
}

pub fn sequential_console(transport: &ScriptedTransport, dashboard: Dashboard) -> Console<ScriptedTransport> {
    let config = ConsoleConfig {
        dashboard,
        concurrent_init: false,
        ..ConsoleConfig::default()
    };
    Console::new(CampusClient::new(transport.clone()), &config)
}

/// The single request with `method`, panicking if there is not exactly one.
pub fn only(transport: &ScriptedTransport, method: Method) -> ApiRequest {
    let matching: Vec<_> = transport
        .requests()
        .into_iter()
        .filter(|request| request.method == method)
        .collect();
    assert_eq!(matching.len(), 1, "expected one {method} request, got {matching:?}");
    matching.into_iter().next().unwrap()
}

pub fn sorted_log(transport: &ScriptedTransport) -> Vec<String> {
    let mut log = transport.request_log();
    log.sort();
    log
}

//! # campus-core
//!
//! Core types shared by every campus admin console crate:
//! - Entity records returned by the admin REST backend (universities,
//!   faculties, departments, users, admins)
//! - The authenticated identity returned by `/auth/me`
//! - Roles, user statuses, dashboards and their tabs
//! - Statistics payloads for the dashboard cards
//! - Cross-cutting error types
//!
//! Records are passed through unchanged: fields the console does not read
//! are kept in a flattened `extra` map so a fetched record serializes back
//! to the same JSON object.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod stats;

pub use errors::CoreError;

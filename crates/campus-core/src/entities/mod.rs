//! Entity records returned by the admin REST backend.
//!
//! The backend owns every invariant; these structs only name the fields the
//! console reads. Each record flattens unread fields into `extra`, and every
//! optional field is skipped when absent, so a record re-serializes to the
//! object it was parsed from.

mod admin;
mod department;
mod faculty;
mod reference;
mod university;
mod user;

pub use admin::Admin;
pub use department::Department;
pub use faculty::Faculty;
pub use reference::{EntityRef, Relation};
pub use university::University;
pub use user::User;

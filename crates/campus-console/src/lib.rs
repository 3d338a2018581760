//! # campus-console
//!
//! View-sync controller for the super-admin and university-admin
//! dashboards.
//!
//! A [`Console`] owns one [`PageState`] (the headless stand-in for the
//! dashboard page) and keeps it in sync with the backend:
//!
//! - **bootstrap**: fetch the signed-in admin, check the role, fill the
//!   header, or redirect to login
//! - **tabs**: one active panel at a time
//! - **loaders**: fetch a collection and re-render its table
//! - **cascades**: a university filter re-scopes dependent options and tables
//! - **forms**: add/edit/submit with typed payloads, confirm-then-delete
//! - **toasts** for every mutation outcome
//!
//! Row rendering lives in [`render`] as pure functions over the entity
//! records.

mod actions;
mod console;
mod error;
mod loaders;

pub mod filters;
pub mod forms;
pub mod page;
pub mod render;
pub mod session;
pub mod tabs;
pub mod toast;
pub mod view;

pub use actions::{Confirm, Outcome};
pub use console::Console;
pub use error::ConsoleError;
pub use forms::{FormKind, FormMode, FormState};
pub use loaders::StatsSnapshot;
pub use page::PageState;
pub use session::SessionContext;

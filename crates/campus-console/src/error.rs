//! Controller error types.

use campus_client::ClientError;
use campus_core::CoreError;
use campus_core::enums::{Dashboard, Tab};
use thiserror::Error;

use crate::forms::FormKind;

/// Errors returned by [`Console`](crate::Console) operations.
///
/// Loader network failures never surface here: they are logged and the
/// previous page state is kept. Mutation failures become error toasts.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Bootstrap failed or the session ended; the page now points at `to`.
    #[error("redirected to {to}")]
    Redirected { to: String },

    /// An operation that needs a bootstrapped session ran without one.
    #[error("no active session; the page has not been bootstrapped")]
    NoSession,

    #[error("tab '{tab}' is not available on the {dashboard} dashboard")]
    UnknownTab { tab: Tab, dashboard: Dashboard },

    #[error("no form is open")]
    FormNotOpen,

    #[error("the {form} form has no field '{field}'")]
    UnknownField { form: FormKind, field: String },

    /// A filter value that is neither empty nor an id.
    #[error("invalid selection '{0}'")]
    InvalidSelection(String),

    #[error("{action} is not available for {entity}")]
    Unsupported {
        action: &'static str,
        entity: &'static str,
    },
}

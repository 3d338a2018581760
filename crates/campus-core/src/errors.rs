//! Cross-cutting error types for the campus console.
//!
//! Transport errors live in `campus-client`, controller errors in
//! `campus-console`. Everything converges into `anyhow` in `campus-cli`.

use thiserror::Error;

/// Errors that can be raised by any campus crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string could not be mapped onto a known enum value.
    #[error("invalid {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use crate::enums::Role;

    use super::*;

    #[test]
    fn unknown_role_names_field_and_value() {
        let error = "librarian".parse::<Role>().unwrap_err();
        assert!(matches!(error, CoreError::InvalidValue { field: "role", .. }));
        assert_eq!(error.to_string(), "invalid role 'librarian'");
    }
}

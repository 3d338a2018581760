//! Filter selections for the faculty, department and user tables.

use campus_core::enums::UserStatus;
use serde::Serialize;

use crate::error::ConsoleError;

/// Current value of every filter select. `None` is the "all" option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub faculty_university: Option<i64>,
    pub department_university: Option<i64>,
    pub department_faculty: Option<i64>,
    pub user_university: Option<i64>,
    pub user_status: Option<UserStatus>,
}

/// Parse an id select value. `""` clears the filter.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidSelection`] for anything that is not an id.
pub fn parse_id(value: &str) -> Result<Option<i64>, ConsoleError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConsoleError::InvalidSelection(value.to_string()))
}

/// Parse a status select value. `""` clears the filter.
///
/// # Errors
///
/// Returns [`ConsoleError::Core`] for an unknown status.
pub fn parse_status(value: &str) -> Result<Option<UserStatus>, ConsoleError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_clears() {
        assert_eq!(parse_id("").unwrap(), None);
        assert_eq!(parse_id(" 4 ").unwrap(), Some(4));
        assert_eq!(parse_status("").unwrap(), None);
        assert_eq!(parse_status("pending").unwrap(), Some(UserStatus::Pending));
    }

    #[test]
    fn garbage_selection_is_an_error() {
        assert!(matches!(parse_id("abc"), Err(ConsoleError::InvalidSelection(v)) if v == "abc"));
        assert!(matches!(parse_status("zombie"), Err(ConsoleError::Core(_))));
    }
}

//! Per-page session context.

use campus_core::entities::University;
use campus_core::identity::Identity;

/// Who is signed in, and for the university dashboard, which university
/// they administer. Written once by bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub identity: Identity,
    pub university: Option<University>,
}

impl SessionContext {
    /// Scope applied to every request on the university dashboard.
    #[must_use]
    pub fn university_id(&self) -> Option<i64> {
        self.university
            .as_ref()
            .map(|university| university.id)
            .or(self.identity.university_id)
    }
}

//! User listing endpoint.

use campus_core::entities::User;
use campus_core::enums::UserStatus;

use crate::{ApiRequest, CampusClient, ClientError, Transport, envelope};

/// Filters for the users table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub status: Option<UserStatus>,
    pub university_id: Option<i64>,
}

impl<T: Transport> CampusClient<T> {
    /// `GET /admin/users?status=&university_id=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn list_users(&self, query: UserQuery) -> Result<Vec<User>, ClientError> {
        let request = ApiRequest::get("/admin/users")
            .query_opt("status", query.status)
            .query_opt("university_id", query.university_id);
        let body = self.call(request).await?;
        envelope::list(body, "users")
    }
}

#[cfg(test)]
mod tests {
    use campus_core::enums::UserStatus;
    use serde_json::json;

    use super::UserQuery;
    use crate::testing::ScriptedTransport;
    use crate::{CampusClient, Method};

    #[tokio::test]
    async fn status_filter_uses_snake_case() {
        let transport = ScriptedTransport::new().on(
            Method::Get,
            "/admin/users?status=pending",
            json!({"users": [{"id": 1, "status": "pending"}]}),
        );
        let client = CampusClient::new(transport);
        let users = client
            .list_users(UserQuery {
                status: Some(UserStatus::Pending),
                university_id: None,
            })
            .await
            .unwrap();
        assert_eq!(users[0].status, Some(UserStatus::Pending));
    }
}

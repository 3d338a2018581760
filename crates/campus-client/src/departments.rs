//! Department endpoints.

use campus_core::entities::Department;

use crate::{ApiRequest, CampusClient, ClientError, Mutation, Payload, Transport, envelope};

const BASE: &str = "/admin/departments";

/// Filters for the department collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentQuery {
    pub university_id: Option<i64>,
    pub faculty_id: Option<i64>,
}

impl<T: Transport> CampusClient<T> {
    /// `GET /admin/departments[?university_id=&faculty_id=]`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn list_departments(&self, query: DepartmentQuery) -> Result<Vec<Department>, ClientError> {
        let request = ApiRequest::get(BASE)
            .query_opt("university_id", query.university_id)
            .query_opt("faculty_id", query.faculty_id);
        let body = self.call(request).await?;
        envelope::list(body, "departments")
    }

    /// `GET /admin/departments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn get_department(&self, id: i64) -> Result<Department, ClientError> {
        let body = self.call(ApiRequest::get(format!("{BASE}/{id}"))).await?;
        envelope::record(body, "department")
    }

    /// `POST /admin/departments`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn create_department(&self, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::post(BASE).json(payload.into())).await
    }

    /// `PUT /admin/departments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn update_department(&self, id: i64, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::put(format!("{BASE}/{id}")).json(payload.into()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::DepartmentQuery;
    use crate::testing::ScriptedTransport;
    use crate::{CampusClient, Method};

    #[tokio::test]
    async fn both_filters_are_sent() {
        let transport = ScriptedTransport::new().on(
            Method::Get,
            "/admin/departments?university_id=1&faculty_id=12",
            json!({"departments": [{"id": 40}]}),
        );
        let client = CampusClient::new(transport);
        let departments = client
            .list_departments(DepartmentQuery {
                university_id: Some(1),
                faculty_id: Some(12),
            })
            .await
            .unwrap();
        assert_eq!(departments.len(), 1);
    }
}

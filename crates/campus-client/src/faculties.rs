//! Faculty endpoints.

use campus_core::entities::Faculty;

use crate::{ApiRequest, CampusClient, ClientError, Mutation, Payload, Transport, envelope};

const BASE: &str = "/admin/faculties";

impl<T: Transport> CampusClient<T> {
    /// `GET /admin/faculties[?university_id=]`.
    ///
    /// `None` issues the unscoped request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn list_faculties(&self, university_id: Option<i64>) -> Result<Vec<Faculty>, ClientError> {
        let request = ApiRequest::get(BASE).query_opt("university_id", university_id);
        let body = self.call(request).await?;
        envelope::list(body, "faculties")
    }

    /// `GET /admin/faculties/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn get_faculty(&self, id: i64) -> Result<Faculty, ClientError> {
        let body = self.call(ApiRequest::get(format!("{BASE}/{id}"))).await?;
        envelope::record(body, "faculty")
    }

    /// `POST /admin/faculties`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn create_faculty(&self, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::post(BASE).json(payload.into())).await
    }

    /// `PUT /admin/faculties/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn update_faculty(&self, id: i64, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::put(format!("{BASE}/{id}")).json(payload.into()))
            .await
    }
}

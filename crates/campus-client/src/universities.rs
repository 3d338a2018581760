//! University endpoints.

use campus_core::entities::University;

use crate::{ApiRequest, CampusClient, ClientError, Mutation, Payload, Transport, envelope};

const BASE: &str = "/admin/universities";

impl<T: Transport> CampusClient<T> {
    /// `GET /admin/universities`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn list_universities(&self) -> Result<Vec<University>, ClientError> {
        let body = self.call(ApiRequest::get(BASE)).await?;
        envelope::list(body, "universities")
    }

    /// `GET /admin/universities/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn get_university(&self, id: i64) -> Result<University, ClientError> {
        let body = self.call(ApiRequest::get(format!("{BASE}/{id}"))).await?;
        envelope::record(body, "university")
    }

    /// `POST /admin/universities`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn create_university(&self, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::post(BASE).json(payload.into())).await
    }

    /// `PUT /admin/universities/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn update_university(&self, id: i64, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::put(format!("{BASE}/{id}")).json(payload.into()))
            .await
    }

    /// `DELETE /admin/universities/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the delete.
    pub async fn delete_university(&self, id: i64) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::delete(format!("{BASE}/{id}"))).await
    }
}

//! Administrator account endpoints.

use campus_core::entities::Admin;

use crate::{ApiRequest, CampusClient, ClientError, Mutation, Payload, Transport, envelope};

const BASE: &str = "/admin/admins";

impl<T: Transport> CampusClient<T> {
    /// `GET /admin/admins`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn list_admins(&self) -> Result<Vec<Admin>, ClientError> {
        let body = self.call(ApiRequest::get(BASE)).await?;
        envelope::list(body, "admins")
    }

    /// `GET /admin/admins/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a malformed body.
    pub async fn get_admin(&self, id: i64) -> Result<Admin, ClientError> {
        let body = self.call(ApiRequest::get(format!("{BASE}/{id}"))).await?;
        envelope::record(body, "admin")
    }

    /// `POST /admin/admins`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn create_admin(&self, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::post(BASE).json(payload.into())).await
    }

    /// `PUT /admin/admins/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the payload.
    pub async fn update_admin(&self, id: i64, payload: Payload) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::put(format!("{BASE}/{id}")).json(payload.into()))
            .await
    }

    /// `DELETE /admin/admins/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the delete.
    pub async fn delete_admin(&self, id: i64) -> Result<Mutation, ClientError> {
        self.mutate(ApiRequest::delete(format!("{BASE}/{id}"))).await
    }
}

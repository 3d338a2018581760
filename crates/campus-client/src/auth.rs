//! Session identity endpoints.

use campus_core::identity::Identity;

use crate::{ApiRequest, CampusClient, ClientError, Transport, envelope};

impl<T: Transport> CampusClient<T> {
    /// Fetch the signed-in user from `GET /auth/me`.
    ///
    /// Returns `Ok(None)` when the backend answers without a `user`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorized`] when the session is missing or
    /// expired, or another [`ClientError`] on transport/parse failure.
    pub async fn me(&self) -> Result<Option<Identity>, ClientError> {
        let body = self.call(ApiRequest::get("/auth/me")).await?;
        envelope::optional(body, "user")
    }

    /// End the backend session with `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails; callers redirect anyway.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.call(ApiRequest::post("/auth/logout")).await.map(|_| ())
    }
}

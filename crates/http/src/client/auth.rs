//! Authentication endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedBecasClient, PublicBecasClient},
};
use becas_core::session::{
    Acknowledgement, ChangeSecretRequest, Credentials, LoginResponse, RegisterRequest,
};
use reqwest::Method;

/// Some deployments answer these calls with 204 or plain text
fn lenient_ack(result: Result<Acknowledgement, ClientError>) -> Result<Acknowledgement, ClientError> {
    match result {
        Err(ClientError::Serialization(_)) => Ok(Acknowledgement::default()),
        other => other,
    }
}

impl PublicBecasClient {
    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute(req).await
    }

    /// `POST /auth/register`; does not start a session
    pub async fn register(&self, request: &RegisterRequest) -> Result<Acknowledgement, ClientError> {
        let req = self.request(Method::POST, "/auth/register").json(request);
        lenient_ack(self.execute(req).await)
    }
}

impl AuthenticatedBecasClient {
    /// `POST /auth/change-password` under the current token
    pub async fn change_password(
        &self,
        request: &ChangeSecretRequest,
    ) -> Result<Acknowledgement, ClientError> {
        let req = self
            .request(Method::POST, "/auth/change-password")
            .json(request);
        lenient_ack(self.execute(req).await)
    }
}

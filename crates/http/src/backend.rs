//! [`AuthBackend`] over HTTP

use crate::client::PublicBecasClient;
use async_trait::async_trait;
use becas_core::error::ApiResult;
use becas_core::session::{
    Acknowledgement, AuthBackend, ChangeSecretRequest, Credentials, LoginResponse, RegisterRequest,
};

/// Routes session authentication calls to the REST backend
#[derive(Clone)]
pub struct HttpAuthBackend {
    client: PublicBecasClient,
}

impl HttpAuthBackend {
    pub fn new(client: PublicBecasClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        Ok(self.client.login(credentials).await?)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<Acknowledgement> {
        Ok(self.client.register(request).await?)
    }

    async fn change_secret(
        &self,
        token: &str,
        request: &ChangeSecretRequest,
    ) -> ApiResult<Acknowledgement> {
        Ok(self
            .client
            .authenticate(token)
            .change_password(request)
            .await?)
    }
}

//! Authentication endpoints the session holder depends on

use crate::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login form payload
#[derive(Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "usuario")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Successful `POST /auth/login` body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "Token", alias = "accessToken", alias = "access_token")]
    pub token: String,
}

/// `POST /auth/register` payload
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    pub password: String,
    #[serde(rename = "cedula", skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("national_id", &self.national_id)
            .finish()
    }
}

/// `POST /auth/change-password` payload
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSecretRequest {
    #[serde(rename = "currentPassword")]
    pub current: String,
    #[serde(rename = "newPassword")]
    pub new: String,
}

impl fmt::Debug for ChangeSecretRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeSecretRequest { .. }")
    }
}

/// Generic acknowledgement body; backends answer with `{}` or a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, alias = "mensaje", alias = "Mensaje", alias = "Message")]
    pub message: Option<String>,
}

/// Authentication calls issued by [`Session`](super::Session).
///
/// Futures are not `Send`: in the browser every request runs on the UI thread.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    async fn register(&self, request: &RegisterRequest) -> ApiResult<Acknowledgement>;

    async fn change_secret(
        &self,
        token: &str,
        request: &ChangeSecretRequest,
    ) -> ApiResult<Acknowledgement>;
}

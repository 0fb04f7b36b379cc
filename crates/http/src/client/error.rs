//! Client error types

use becas_core::error::ApiError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    /// 401
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// 403
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other 4xx
    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: String },

    /// Success status with a body we could not decode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code, keeping the raw body for classification
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 => Self::AuthenticationFailed(body),
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            code @ 400..=499 => Self::BadRequest { status: code, body },
            code => Self::ServerError { status: code, body },
        }
    }

    /// Whether the stored session should be dropped
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::Forbidden(_))
    }

    /// HTTP status, `None` when no response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest { status, .. } | Self::ServerError { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::AuthenticationFailed(body) => ApiError::classify(401, &body),
            ClientError::Forbidden(body) => ApiError::classify(403, &body),
            ClientError::NotFound(body) => ApiError::classify(404, &body),
            ClientError::BadRequest { status, body } | ClientError::ServerError { status, body } => {
                ApiError::classify(status, &body)
            }
            ClientError::Request(err) => match err.status() {
                Some(status) => ApiError::classify(status.as_u16(), ""),
                None => ApiError::Network(err.to_string()),
            },
            ClientError::Serialization(err) => ApiError::Unexpected {
                status: 0,
                detail: Some(err.to_string()),
            },
            ClientError::Configuration(message) => ApiError::Configuration(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_buckets() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::CONFLICT, "dup".into()),
            ClientError::BadRequest { status: 409, .. }
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_auth_statuses_expire_session() {
        let forbidden = ClientError::from_status(StatusCode::FORBIDDEN, String::new());
        assert!(forbidden.is_auth_expired());
        assert!(ApiError::from(forbidden).is_auth_failure());

        let not_found = ClientError::from_status(StatusCode::NOT_FOUND, String::new());
        assert!(!not_found.is_auth_expired());
    }

    #[test]
    fn test_detail_survives_conversion() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Periodo cerrado"}"#.into(),
        );
        assert_eq!(ApiError::from(err).user_message(), "Periodo cerrado");
    }

    #[test]
    fn test_undecodable_success_body_is_unexpected() {
        let err = serde_json::from_str::<Vec<i64>>("<html>").unwrap_err();
        let api: ApiError = ClientError::from(err).into();
        assert!(matches!(api, ApiError::Unexpected { .. }));
    }
}

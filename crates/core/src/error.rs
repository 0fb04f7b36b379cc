//! Client-side error taxonomy
//!
//! Every failure a screen can observe is collapsed into one of the [`ApiError`]
//! variants. Views only ever render [`ApiError::user_message`]; the session layer
//! reacts to [`ApiError::is_auth_failure`].

use serde_json::Value;
use thiserror::Error;

/// Message shown when the backend cannot be reached at all (status 0).
pub const UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el servidor. Verifique su conexión.";

/// Message shown when a 401/403 forces the user back to the login page.
pub const SESSION_EXPIRED_MESSAGE: &str = "Su sesión ha expirado. Inicie sesión nuevamente.";

/// Shown when the browser refuses to persist the session token.
pub const STORAGE_MESSAGE: &str =
    "No se pudo guardar la sesión en este navegador. Revise la configuración de privacidad.";

/// Generic fallback for 5xx responses and bodies we cannot make sense of.
pub const FALLBACK_MESSAGE: &str = "Ocurrió un error inesperado. Intente nuevamente.";

/// Fields inspected, in order, when looking for a human readable error detail.
const DETAIL_FIELDS: [&str; 3] = ["detalle", "message", "error"];

/// Classified error surfaced to views and to the session holder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP status
    #[error("Network error: {0}")]
    Network(String),

    /// 401 or 403; the session must be discarded
    #[error("Authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// 4xx carrying a detail the user can act on
    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    /// 5xx, or a response body that could not be understood
    #[error("Unexpected response ({status})")]
    Unexpected { status: u16, detail: Option<String> },

    /// An authenticated call was attempted without a session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The stored or returned token could not be decoded
    #[error("Malformed session token")]
    MalformedToken,

    /// The token could not be written to persistent storage
    #[error("Session storage unavailable")]
    StorageUnavailable,

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Classify a completed HTTP exchange.
    ///
    /// `status` 0 stands for "no response". Success statuses are never passed
    /// here; a success body that fails to parse is reported as
    /// [`ApiError::Unexpected`] by the caller.
    pub fn classify(status: u16, body: &str) -> Self {
        match status {
            0 => Self::Network(body.to_string()),
            401 | 403 => Self::Unauthorized {
                status,
                message: extract_detail(body).unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.into()),
            },
            400..=499 => match extract_detail(body) {
                Some(message) => Self::Validation { status, message },
                None => Self::Unexpected {
                    status,
                    detail: None,
                },
            },
            _ => Self::Unexpected {
                status,
                detail: extract_detail(body),
            },
        }
    }

    /// Whether this error must clear the session and force a login
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::NotAuthenticated)
    }

    /// HTTP status associated with the error, 0 when there was none
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Validation { status, .. }
            | Self::Unexpected { status, .. } => *status,
            _ => 0,
        }
    }

    /// Text rendered next to the form or list that issued the request
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Unauthorized { message, .. } | Self::Validation { message, .. } => {
                message.clone()
            }
            Self::NotAuthenticated | Self::MalformedToken => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::StorageUnavailable => STORAGE_MESSAGE.to_string(),
            Self::Unexpected { .. } | Self::Configuration(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Pull the human readable detail out of an error body.
///
/// JSON bodies are searched for `detalle`, `message` and `error` in that order;
/// only non-empty strings count. A bare JSON string is taken as is; anything
/// that is not JSON (HTML error pages, proxy banners) yields `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => DETAIL_FIELDS.iter().find_map(|field| {
            map.get(*field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }),
        Ok(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_zero_is_network() {
        let err = ApiError::classify(0, "connection refused");
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_auth_statuses_require_login() {
        for status in [401, 403] {
            let err = ApiError::classify(status, "");
            assert!(err.is_auth_failure());
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn test_detail_field_precedence() {
        let body = r#"{"error":"e","message":"m","detalle":"La cédula ya existe"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("La cédula ya existe"));

        let body = r#"{"error":"e","message":"m"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("m"));

        let body = r#"{"error":"e","message":"  "}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("e"));
    }

    #[test]
    fn test_validation_message_surfaced_verbatim() {
        let err = ApiError::classify(400, r#"{"detalle":"El monto debe ser positivo"}"#);
        assert_eq!(
            err,
            ApiError::Validation {
                status: 400,
                message: "El monto debe ser positivo".into()
            }
        );
        assert_eq!(err.user_message(), "El monto debe ser positivo");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::classify(404, "<html><body>Not Found</body></html>");
        assert!(matches!(err, ApiError::Unexpected { status: 404, .. }));
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = ApiError::classify(409, "Registro duplicado");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = ApiError::classify(409, r#""Registro duplicado""#);
        assert_eq!(err.user_message(), "Registro duplicado");
    }

    #[test]
    fn test_unauthorized_detail_is_shown() {
        let err = ApiError::classify(401, r#"{"message":"Credenciales inválidas"}"#);
        assert!(err.is_auth_failure());
        assert_eq!(err.user_message(), "Credenciales inválidas");

        let err = ApiError::classify(403, "<html>Forbidden</html>");
        assert_eq!(err.user_message(), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_client_error_without_detail_falls_back() {
        let err = ApiError::classify(422, r#"{"code":17}"#);
        assert!(matches!(err, ApiError::Unexpected { status: 422, .. }));
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_server_errors_use_generic_message() {
        let err = ApiError::classify(500, r#"{"message":"NullReferenceException"}"#);
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert!(!err.is_auth_failure());
    }
}

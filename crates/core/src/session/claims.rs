//! Bearer token payload decoding
//!
//! The signature is never checked here; the backend does that on every call.
//! The client only needs the claims to know who is logged in and until when.

use crate::types::{Role, UnknownRole, User};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};
use thiserror::Error;

const SUBJECT_CLAIMS: [&str; 3] = ["sub", "id", "userId"];
const ROLE_CLAIMS: [&str; 2] = ["role", "rol"];
const NAME_CLAIMS: [&str; 2] = ["name", "nombre"];
const EMAIL_CLAIMS: [&str; 2] = ["email", "correo"];

/// Why a token could not be turned into [`Claims`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("Token must have three dot-separated segments")]
    Format,

    #[error("Token payload is not valid base64url")]
    Base64,

    #[error("Token payload is not a JSON object")]
    Json,

    #[error("Missing claim: {0}")]
    MissingClaim(&'static str),

    #[error("Invalid claim: {0}")]
    InvalidClaim(&'static str),

    #[error(transparent)]
    Role(#[from] UnknownRole),
}

/// Decoded session claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub subject: i64,
    pub role: Role,
    /// Display name; empty when the token carries none
    pub name: String,
    pub email: Option<String>,
    pub issued_at: Option<i64>,
    /// Expiry, seconds since the Unix epoch
    pub expires_at: i64,
}

impl Claims {
    /// Expired tokens are those whose `exp` is not strictly in the future
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.subject,
            name: self.name.clone(),
            role: self.role,
            email: self.email.clone(),
        }
    }
}

/// Decode the payload segment of a `header.payload.signature` token
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(ClaimsError::Format);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| ClaimsError::Base64)?;

    let map = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => map,
        _ => return Err(ClaimsError::Json),
    };

    claims_from_map(&map)
}

fn claims_from_map(map: &Map<String, Value>) -> Result<Claims, ClaimsError> {
    let subject = first(map, &SUBJECT_CLAIMS)
        .ok_or(ClaimsError::MissingClaim("sub"))
        .and_then(|value| integer(value).ok_or(ClaimsError::InvalidClaim("sub")))?;

    let role = first(map, &ROLE_CLAIMS)
        .ok_or(ClaimsError::MissingClaim("role"))?
        .as_str()
        .ok_or(ClaimsError::InvalidClaim("role"))?
        .parse::<Role>()?;

    let expires_at = map
        .get("exp")
        .ok_or(ClaimsError::MissingClaim("exp"))
        .and_then(|value| integer(value).ok_or(ClaimsError::InvalidClaim("exp")))?;

    let issued_at = map.get("iat").and_then(integer);

    let name = first(map, &NAME_CLAIMS)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let email = first(map, &EMAIL_CLAIMS)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(Claims {
        subject,
        role,
        name,
        email,
        issued_at,
        expires_at,
    })
}

fn first<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
}

/// Integer claims may arrive as numbers or numeric strings
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Build an unsigned token around the given payload; test helper shared by the
/// crates of this workspace.
#[doc(hidden)]
pub fn encode_unsigned(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_standard_claims() {
        let token = encode_unsigned(&json!({
            "sub": 42,
            "role": "admin",
            "name": "Ana Torres",
            "email": "ana@uni.edu",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.subject, 42);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.name, "Ana Torres");
        assert_eq!(claims.email.as_deref(), Some("ana@uni.edu"));
        assert_eq!(claims.issued_at, Some(1_700_000_000));
        assert_eq!(claims.expires_at, 1_700_003_600);
    }

    #[test]
    fn test_decode_spanish_aliases_and_string_subject() {
        let token = encode_unsigned(&json!({
            "id": "7",
            "rol": "Estudiante",
            "nombre": "Luis",
            "exp": 10
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.subject, 7);
        assert_eq!(claims.role, Role::Estudiante);
        assert_eq!(claims.name, "Luis");
        assert_eq!(claims.email, None);
        assert_eq!(claims.issued_at, None);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims("not-a-token"), Err(ClaimsError::Format));
        assert_eq!(decode_claims("a.b.c.d"), Err(ClaimsError::Format));
        assert_eq!(decode_claims("a.@@@.c"), Err(ClaimsError::Base64));

        let not_object = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2]"));
        assert_eq!(decode_claims(&not_object), Err(ClaimsError::Json));

        let missing_exp = encode_unsigned(&json!({"sub": 1, "role": "admin"}));
        assert_eq!(decode_claims(&missing_exp), Err(ClaimsError::MissingClaim("exp")));

        let bad_role = encode_unsigned(&json!({"sub": 1, "role": "docente", "exp": 5}));
        assert!(matches!(decode_claims(&bad_role), Err(ClaimsError::Role(_))));
    }

    #[test]
    fn test_padded_payload_is_tolerated() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(json!({"sub": 1, "role": "admin", "exp": 9}).to_string());
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).unwrap().expires_at, 9);
    }

    #[test]
    fn test_expiry_boundary() {
        let token = encode_unsigned(&json!({"sub": 1, "role": "admin", "exp": 100}));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
        assert!(!claims.is_expired_at(99));
    }
}

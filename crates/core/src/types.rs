use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried in the session token
///
/// Deserialization is case-insensitive; the backend is not consistent about it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    Admin,
    Estudiante,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Estudiante => "estudiante",
        }
    }

    /// Route a user of this role lands on after login
    pub fn home_path(&self) -> &'static str {
        match self {
            Self::Admin => "/",
            Self::Estudiante => "/mis-solicitudes",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "estudiante" => Ok(Self::Estudiante),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Identity derived from the session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub email: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" Estudiante ".parse::<Role>(), Ok(Role::Estudiante));
        assert!("docente".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Estudiante).unwrap(), "\"estudiante\"");
        let role: Role = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert!(serde_json::from_str::<Role>("\"rector\"").is_err());
    }
}

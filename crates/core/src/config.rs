//! Session and navigation configuration

use serde::{Deserialize, Serialize};

/// Settings shared by the session holder and the route guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Persistent storage key holding the bearer token
    pub token_key: String,
    /// Unauthenticated entry point
    pub login_path: String,
    /// Query parameter carrying the originally requested path
    pub return_param: String,
}

impl SessionConfig {
    pub const DEFAULT_TOKEN_KEY: &'static str = "becas_token";
    pub const DEFAULT_LOGIN_PATH: &'static str = "/login";
    pub const DEFAULT_RETURN_PARAM: &'static str = "returnUrl";
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: Self::DEFAULT_TOKEN_KEY.to_string(),
            login_path: Self::DEFAULT_LOGIN_PATH.to_string(),
            return_param: Self::DEFAULT_RETURN_PARAM.to_string(),
        }
    }
}

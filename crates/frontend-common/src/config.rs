//! Frontend configuration

use becas_core::SessionConfig;

/// Runtime settings of the web client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST base URL, without trailing slash
    pub api_base_url: String,
    pub session: SessionConfig,
}

impl AppConfig {
    /// How often the token expiry is re-checked while a session is open
    pub const TOKEN_CHECK_INTERVAL_MS: u32 = 60_000;

    /// API path appended to the page origin when no URL is baked in
    pub const DEFAULT_API_PATH: &'static str = "/api";

    /// `BECAS_API_URL` at compile time, else `window.origin + "/api"`
    pub fn from_env() -> Self {
        let api_base_url = option_env!("BECAS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(default_api_url);

        Self {
            api_base_url,
            session: SessionConfig::default(),
        }
    }
}

fn default_api_url() -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{}", AppConfig::DEFAULT_API_PATH)
}

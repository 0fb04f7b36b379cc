//! Route access guard
//!
//! A pure, synchronous decision evaluated on every navigation attempt. Nothing
//! here is cached: login state and role are read from the [`Session`] each time.

use crate::config::SessionConfig;
use crate::session::Session;
use crate::types::Role;
use tracing::debug;
use url::form_urlencoded;

/// Access level a route declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session (login, 404)
    Public,
    /// Any logged-in user
    Authenticated,
    /// Only users whose role equals this one
    Role(Role),
}

impl Access {
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Role(role) => Some(*role),
            _ => None,
        }
    }
}

/// Navigation the guard (or a logout) asks the router to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub return_param: String,
    /// Originally requested path, when the user should come back to it
    pub return_url: Option<String>,
}

impl Redirect {
    pub fn to_login(config: &SessionConfig, return_url: Option<&str>) -> Self {
        Self {
            path: config.login_path.clone(),
            return_param: config.return_param.clone(),
            return_url: return_url.map(str::to_string),
        }
    }

    /// Path plus the URL-encoded return parameter
    pub fn href(&self) -> String {
        match &self.return_url {
            Some(url) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(&self.return_param, url)
                    .finish();
                format!("{}?{query}", self.path)
            }
            None => self.path.clone(),
        }
    }
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny(Redirect),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether navigation to `requested` may proceed.
///
/// 1. No valid session: redirect to login carrying `requested` as return target.
/// 2. Declared role differs from the user's: redirect to login.
/// 3. Otherwise allow.
pub fn authorize(session: &Session, requested: &str, required_role: Option<Role>) -> GuardDecision {
    let config = session.config();

    if !session.is_logged_in() {
        debug!(path = requested, "Navigation denied: not logged in");
        return GuardDecision::Deny(Redirect::to_login(config, Some(requested)));
    }

    if let Some(required) = required_role {
        let role = session.current_user().map(|user| user.role);
        if role != Some(required) {
            debug!(path = requested, required = %required, "Navigation denied: role mismatch");
            return GuardDecision::Deny(Redirect::to_login(config, None));
        }
    }

    GuardDecision::Allow
}

/// Evaluate the guard for a route's declared access level
pub fn authorize_access(session: &Session, requested: &str, access: Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Allow,
        Access::Authenticated | Access::Role(_) => {
            authorize(session, requested, access.required_role())
        }
    }
}

/// Where to go after a successful login.
///
/// Reads the return parameter from `query` (with or without the leading `?`)
/// and only honors same-origin absolute paths; anything else yields `fallback`.
pub fn return_target(query: &str, config: &SessionConfig, fallback: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == config.return_param.as_str())
        .map(|(_, value)| value.into_owned())
        .filter(|target| is_local_path(target) && !target.starts_with(&config.login_path))
        .unwrap_or_else(|| fallback.to_string())
}

/// Browsers strip tabs and newlines from URLs, so `/\t/host` would become
/// `//host`; any whitespace or control character is rejected outright.
fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_encodes_return_url() {
        let config = SessionConfig::default();
        let redirect = Redirect::to_login(&config, Some("/solicitudes?estado=2&q=a b"));
        assert_eq!(
            redirect.href(),
            "/login?returnUrl=%2Fsolicitudes%3Festado%3D2%26q%3Da+b"
        );

        let plain = Redirect::to_login(&config, None);
        assert_eq!(plain.href(), "/login");
    }

    #[test]
    fn test_return_target_round_trips_href() {
        let config = SessionConfig::default();
        let redirect = Redirect::to_login(&config, Some("/solicitudes?estado=2"));
        let href = redirect.href();
        let query = href.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(return_target(query, &config, "/"), "/solicitudes?estado=2");
    }

    #[test]
    fn test_return_target_rejects_foreign_targets() {
        let config = SessionConfig::default();
        for query in [
            "?returnUrl=https%3A%2F%2Fevil.example",
            "?returnUrl=%2F%2Fevil.example",
            "?returnUrl=%2Flogin",
            "?returnUrl=%2F%09%2Fevil.example",
            "?returnUrl=%2F%0A%2Fevil.example",
            "?returnUrl=%2F%0D%2Fevil.example",
            "?returnUrl=%2F%00%2Fevil.example",
            "?returnUrl=%2Fsolicitudes%20x",
            "?other=1",
            "",
        ] {
            assert_eq!(return_target(query, &config, "/home"), "/home", "{query}");
        }
    }

    #[test]
    fn test_access_required_role() {
        assert_eq!(Access::Role(Role::Admin).required_role(), Some(Role::Admin));
        assert_eq!(Access::Authenticated.required_role(), None);
        assert_eq!(Access::Public.required_role(), None);
    }
}

//! Session state holder
//!
//! [`Session`] is the single source of truth for who is logged in. It never
//! caches identity independently of the stored token: every freshness check
//! decodes the token again, and a token that fails to decode or has expired is
//! discarded on the spot.

pub mod backend;
pub mod claims;
pub mod clock;
pub mod store;

pub use backend::{
    Acknowledgement, AuthBackend, ChangeSecretRequest, Credentials, LoginResponse,
    RegisterRequest,
};
pub use claims::{Claims, ClaimsError, decode_claims};
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{MemoryTokenStore, TokenStore};

use crate::config::SessionConfig;
use crate::error::{ApiError, ApiResult};
use crate::guard::Redirect;
use crate::types::User;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

/// Callback invoked with the new identity after every session change
pub type Observer = Rc<dyn Fn(Option<&User>)>;

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

/// Client session context.
///
/// Constructed explicitly and passed to whatever needs it; storage and time are
/// injected so tests can run against fake tokens.
pub struct Session {
    config: SessionConfig,
    store: Box<dyn TokenStore>,
    clock: Box<dyn Clock>,
    user: RefCell<Option<User>>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_observer: Cell<usize>,
}

impl Session {
    /// Create a session holder. Call [`Session::initialize`] before use.
    pub fn new(
        config: SessionConfig,
        store: impl TokenStore + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            config,
            store: Box::new(store),
            clock: Box::new(clock),
            user: RefCell::new(None),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Restore the identity from storage at start-up
    pub fn initialize(&self) -> Option<User> {
        let user = self.valid_claims().map(|claims| claims.to_user());
        *self.user.borrow_mut() = user.clone();
        debug!(logged_in = user.is_some(), "Session initialized");
        user
    }

    /// True iff a token is stored and its expiry is in the future.
    ///
    /// A failing check also drops the in-memory identity, so
    /// [`Session::current_user`] never outlives the token.
    pub fn is_logged_in(&self) -> bool {
        let user = self.valid_claims().map(|claims| claims.to_user());
        let logged_in = user.is_some();
        self.replace_user(user);
        logged_in
    }

    /// Last known identity, without re-validating expiry
    pub fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// Raw bearer token, only while it is still valid
    pub fn token(&self) -> Option<String> {
        self.valid_claims()?;
        self.store.get(&self.config.token_key)
    }

    /// Authenticate against the backend and establish the session.
    ///
    /// Backend failures are returned unchanged and leave the session as it was.
    /// A token the store refuses to keep fails with
    /// [`ApiError::StorageUnavailable`] instead of a session that would vanish
    /// on the next check.
    pub async fn login(
        &self,
        backend: &dyn AuthBackend,
        identifier: &str,
        secret: &str,
    ) -> ApiResult<User> {
        let credentials = Credentials::new(identifier, secret);
        let response = backend.login(&credentials).await?;

        let claims = decode_claims(&response.token).map_err(|e| {
            warn!(error = %e, "Login returned an undecodable token");
            ApiError::MalformedToken
        })?;
        if claims.is_expired_at(self.clock.now()) {
            warn!("Login returned an already expired token");
            return Err(ApiError::MalformedToken);
        }

        self.store.set(&self.config.token_key, &response.token);
        if self.store.get(&self.config.token_key).as_deref() != Some(response.token.as_str()) {
            warn!("Session token could not be persisted");
            self.store.remove(&self.config.token_key);
            return Err(ApiError::StorageUnavailable);
        }

        let user = claims.to_user();
        debug!(user_id = user.id, role = %user.role, "Logged in");
        // Observers always hear about a login, even as the same identity
        *self.user.borrow_mut() = Some(user.clone());
        self.notify(Some(&user));
        Ok(user)
    }

    /// Create an account; does not log the new user in
    pub async fn register(
        &self,
        backend: &dyn AuthBackend,
        request: &RegisterRequest,
    ) -> ApiResult<Acknowledgement> {
        backend.register(request).await
    }

    /// Forget the session and return the redirect to the login page
    pub fn logout(&self) -> Redirect {
        self.clear();
        debug!("Logged out");
        Redirect::to_login(&self.config, None)
    }

    /// Same as [`Session::logout`], for sessions the backend rejected (401/403)
    pub fn invalidate(&self) -> Redirect {
        if self.current_user().is_some() {
            warn!("Session rejected by the backend, clearing it");
        }
        self.clear();
        Redirect::to_login(&self.config, None)
    }

    /// Ask the backend to change the password under the current token.
    ///
    /// Local state is left alone: the session stays valid until the token
    /// expires or the backend rejects it.
    pub async fn change_secret(
        &self,
        backend: &dyn AuthBackend,
        current: &str,
        new: &str,
    ) -> ApiResult<Acknowledgement> {
        let token = self.token().ok_or(ApiError::NotAuthenticated)?;
        let request = ChangeSecretRequest {
            current: current.to_string(),
            new: new.to_string(),
        };
        backend.change_secret(&token, &request).await
    }

    /// Re-derive the identity from whatever storage holds now.
    ///
    /// Used when another tab logs in or out.
    pub fn sync_from_storage(&self) -> Option<User> {
        let user = self.valid_claims().map(|claims| claims.to_user());
        self.replace_user(user.clone());
        user
    }

    /// Register an observer notified after every login, and after logout,
    /// invalidation or sync whenever they change the identity
    pub fn subscribe(&self, observer: impl Fn(Option<&User>) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(other, _)| *other != id);
    }

    fn clear(&self) {
        self.store.remove(&self.config.token_key);
        self.replace_user(None);
    }

    /// Decode the stored token, discarding it when it is unusable
    fn valid_claims(&self) -> Option<Claims> {
        let token = self.store.get(&self.config.token_key)?;

        match decode_claims(&token) {
            Ok(claims) if !claims.is_expired_at(self.clock.now()) => Some(claims),
            Ok(_) => {
                debug!("Stored token expired, discarding it");
                self.store.remove(&self.config.token_key);
                None
            }
            Err(e) => {
                warn!(error = %e, "Stored token is malformed, discarding it");
                self.store.remove(&self.config.token_key);
                None
            }
        }
    }

    /// Swap the identity and notify observers when it actually changed
    fn replace_user(&self, user: Option<User>) {
        let changed = *self.user.borrow() != user;
        if !changed {
            return;
        }
        *self.user.borrow_mut() = user.clone();
        self.notify(user.as_ref());
    }

    fn notify(&self, user: Option<&User>) {
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(user);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("user", &self.user.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

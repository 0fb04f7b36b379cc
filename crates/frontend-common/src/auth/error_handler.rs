//! Global auth error handler
//!
//! Any request that comes back 401/403 reports here instead of every screen
//! checking for it. The session provider installs the callback.

use becas_core::ApiError;
use std::cell::RefCell;
use std::rc::Rc;

type AuthErrorCallback = Rc<dyn Fn(&ApiError)>;

thread_local! {
    static AUTH_ERROR_CALLBACK: RefCell<Option<AuthErrorCallback>> = const { RefCell::new(None) };
}

pub fn set_auth_error_callback(callback: AuthErrorCallback) {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

pub fn clear_auth_error_callback() {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Report `error` if it is an auth failure; other errors are ignored
pub fn report_auth_error(error: &ApiError) {
    if !error.is_auth_failure() {
        return;
    }
    // Clone out so the callback may reinstall itself
    let callback = AUTH_ERROR_CALLBACK.with(|cb| cb.borrow().clone());
    if let Some(callback) = callback {
        callback(error);
    }
}

//! `localStorage`-backed token storage

use becas_core::TokenStore;
use tracing::warn;
use web_sys::Storage;

/// Keeps the bearer token in `window.localStorage`, shared by every tab of the
/// origin. Without storage access (private mode, sandboxed iframes) reads
/// return nothing and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!(key, "localStorage rejected the session token");
                }
            }
            None => warn!("localStorage unavailable, session will not persist"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

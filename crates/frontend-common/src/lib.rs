//! Shared building blocks of the Becas web client

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod storage;

pub use auth::{RequireAccess, SessionContext, SessionProvider, use_current_user, use_session};
pub use client::ApiClient;
pub use config::AppConfig;
pub use hooks::{Fetch, use_fetch};
pub use storage::LocalStorageTokenStore;

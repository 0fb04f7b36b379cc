//! Session handling for the web client

pub mod context;
pub mod error_handler;
pub mod guard;

pub use context::{SessionContext, SessionProvider, use_current_user, use_session};
pub use guard::RequireAccess;

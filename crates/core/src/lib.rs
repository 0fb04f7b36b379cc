//! Becas client core: session state, route guarding and canonical models

pub mod config;
pub mod error;
pub mod filter;
pub mod guard;
pub mod lookup;
pub mod models;
pub mod session;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod types;

pub use config::SessionConfig;
pub use error::{ApiError, ApiResult};
pub use filter::Searchable;
pub use guard::{Access, GuardDecision, Redirect, authorize, authorize_access, return_target};
pub use lookup::{LookupItem, NameLookup};
pub use session::{
    AuthBackend, Claims, Clock, Credentials, MemoryTokenStore, Session, SystemClock, TokenStore,
};
pub use types::{Role, User};

#[cfg(test)]
mod tests;

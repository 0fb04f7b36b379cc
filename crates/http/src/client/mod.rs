//! Becas REST client

pub mod auth;
pub mod error;
pub mod resources;
pub mod typed;
pub mod workflow;

pub use error::ClientError;
pub use resources::Resource;
pub use typed::{AuthenticatedBecasClient, PublicBecasClient, TypedClientBuilder};

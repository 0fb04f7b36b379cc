//! HTTP client for the Becas REST API
//!
//! A [`PublicBecasClient`] covers login and registration; every other endpoint
//! requires an [`AuthenticatedBecasClient`], obtained by attaching the session
//! token. Failures surface as [`ClientError`] and convert into the UI-facing
//! [`becas_core::ApiError`].

pub mod backend;
pub mod client;

pub use backend::HttpAuthBackend;
pub use client::{
    AuthenticatedBecasClient, ClientError, PublicBecasClient, Resource, TypedClientBuilder,
};

//! API access bound to the current session

use crate::auth::error_handler::report_auth_error;
use becas_core::{ApiError, ApiResult, Session};
use becas_http::{AuthenticatedBecasClient, ClientError, PublicBecasClient};
use std::future::Future;
use std::rc::Rc;

/// Hands out clients carrying the session token and routes auth failures to
/// the global handler
#[derive(Clone)]
pub struct ApiClient {
    public: PublicBecasClient,
    session: Rc<Session>,
}

impl ApiClient {
    pub fn new(public: PublicBecasClient, session: Rc<Session>) -> Self {
        Self { public, session }
    }

    pub fn public(&self) -> &PublicBecasClient {
        &self.public
    }

    /// Client for the current token; fails without a live session
    pub fn authenticated(&self) -> ApiResult<AuthenticatedBecasClient> {
        let token = self.session.token().ok_or(ApiError::NotAuthenticated)?;
        Ok(self.public.authenticate(token))
    }

    /// Run one authenticated call and classify its failure.
    ///
    /// 401/403 (and a missing session) also fire the auth error handler, which
    /// invalidates the session and sends the user to the login page.
    pub async fn run<T, F, Fut>(&self, call: F) -> ApiResult<T>
    where
        F: FnOnce(AuthenticatedBecasClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let result = match self.authenticated() {
            Ok(client) => call(client).await.map_err(ApiError::from),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            report_auth_error(err);
        }
        result
    }
}

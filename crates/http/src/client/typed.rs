//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("becas-client/", env!("CARGO_PKG_VERSION"));

/// Client for public endpoints (login, registration)
#[derive(Clone)]
pub struct PublicBecasClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a session token
#[derive(Clone)]
pub struct AuthenticatedBecasClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_client(timeout: Option<Duration>, user_agent: Option<String>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let user_agent = user_agent.unwrap_or_else(|| USER_AGENT.to_string());
        let mut builder = ClientBuilder::new().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        // The browser owns timeouts and the User-Agent header
        let _ = (timeout, user_agent);
        ClientBuilder::new().build()?
    };

    Ok(client)
}

/// Turn a non-success response into a [`ClientError`], keeping its body
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ClientError::from_status(status, body);
    if err.is_auth_expired() {
        warn!(status = status.as_u16(), "request rejected, session no longer valid");
    } else {
        debug!(status = status.as_u16(), "request failed");
    }
    Err(err)
}

async fn read_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = check_status(request.send().await?).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

async fn read_empty(request: RequestBuilder) -> Result<(), ClientError> {
    check_status(request.send().await?).await?;
    Ok(())
}

impl PublicBecasClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        TypedClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "public request");
        self.client.request(method, url)
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        read_json(request).await
    }

    /// Attach a session token to get an authenticated client
    pub fn authenticate(&self, token: impl Into<String>) -> AuthenticatedBecasClient {
        AuthenticatedBecasClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: token.into(),
        }
    }
}

impl AuthenticatedBecasClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        TypedClientBuilder::new()
            .base_url(base_url)
            .build_authenticated(token)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying `Authorization: Bearer <token>`
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "authenticated request");
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        read_json(request).await
    }

    /// Send a request whose response body is irrelevant (204 and friends)
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        read_empty(request).await
    }

    /// Create a public client sharing the same connection pool
    pub fn to_public(&self) -> PublicBecasClient {
        PublicBecasClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TypedClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL, e.g. `https://becas.example.edu/api`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    fn parts(self) -> Result<(Client, String), ClientError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok((build_client(self.timeout, self.user_agent)?, base_url))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicBecasClient, ClientError> {
        let (client, base_url) = self.parts()?;
        Ok(PublicBecasClient { client, base_url })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedBecasClient, ClientError> {
        let (client, base_url) = self.parts()?;
        Ok(AuthenticatedBecasClient {
            client,
            base_url,
            token: token.into(),
        })
    }
}

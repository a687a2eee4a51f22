//! Vectorator client implementation.
//!
//! The client maps typed method calls onto the backend's HTTP surface. It
//! holds only a connection pool and immutable configuration; all resource
//! state lives on the server and is re-fetched, never cached.

use std::sync::Arc;

use reqwest::{Client as HttpClient, ClientBuilder};
use url::Url;
use vectorator_data::TenantScope;

use crate::config::VectoratorConfig;
use crate::error::{Error, Result};
use crate::route::Route;
use crate::TRACING_TARGET_CLIENT;

mod chats;
mod documents;
mod projects;
pub(crate) mod stream;

/// Inner client that holds the HTTP client and configuration.
struct ClientInner {
    http: HttpClient,
    config: VectoratorConfig,
}

/// Client for the Vectorator document question-answering service.
///
/// Cloning is cheap; clones share the connection pool and configuration.
/// Concurrent calls against different chats or tenants are independent and
/// need no locking on the client side.
///
/// # Examples
///
/// ```rust,ignore
/// use vectorator_client::{VectoratorClient, VectoratorConfig};
///
/// let config = VectoratorConfig::builder()
///     .with_app_name("myapp")
///     .with_default_user("alice")
///     .build()?;
/// let client = VectoratorClient::new(config)?;
///
/// let tenant = client.tenant(None)?;
/// let projects = client.list_projects(&tenant).await?;
/// ```
#[derive(Clone)]
pub struct VectoratorClient {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for VectoratorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectoratorClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl VectoratorClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: VectoratorConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            app_name = %config.app_name,
            "Creating Vectorator client"
        );

        let http = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        let inner = ClientInner { http, config };
        let client = Self {
            inner: Arc::new(inner),
        };

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            "Vectorator client created successfully"
        );

        Ok(client)
    }

    /// Creates a new client for an application with default configuration.
    pub fn with_defaults(app_name: impl Into<String>) -> Result<Self> {
        let config = VectoratorConfig::builder()
            .with_app_name(app_name)
            .build()?;

        Self::new(config)
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &VectoratorConfig {
        &self.inner.config
    }

    /// Derives the tenant scope for an optional explicit user, falling back
    /// to the configured default user.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no user identifier is available.
    pub fn tenant(&self, explicit_user: Option<&str>) -> Result<TenantScope> {
        Ok(self.inner.config.tenant_scope(explicit_user)?)
    }

    /// Assembles the absolute URL for a route.
    fn url_for(&self, route: &Route<'_>) -> Result<Url> {
        let mut url = self.inner.config.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config("base URL cannot be a base"))?;
            segments.pop_if_empty();
            for segment in route.segments() {
                segments.push(&segment);
            }
            if route.trailing_slash() {
                segments.push("");
            }
        }
        Ok(url)
    }

    /// Creates a request builder for a route.
    pub(crate) fn request(&self, route: &Route<'_>) -> Result<reqwest::RequestBuilder> {
        let url = self.url_for(route)?;
        Ok(self.inner.http.request(route.method(), url))
    }
}

/// Passes a successful response through and turns any other status into a
/// remote service error carrying the body verbatim.
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    tracing::debug!(
        target: TRACING_TARGET_CLIENT,
        status = status.as_u16(),
        "Request failed"
    );

    Err(Error::remote(status.as_u16(), body))
}

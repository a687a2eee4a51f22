//! Client configuration.
//!
//! All settings are fixed at construction time and passed by value; there
//! is no process-global fallback identity. The default tenant user lives
//! here as an explicit field.

use std::time::Duration;

use derive_builder::Builder;
use url::Url;
use vectorator_data::{TenantScope, TenantScopeError};

use crate::error::Error;

/// Default values for configuration options.
pub mod defaults {
    use std::time::Duration;

    /// In-cluster service URL of the Vectorator backend.
    pub const BASE_URL: &str = "http://vectorator-service.vectorator.svc.cluster.local:8000";

    /// Default request timeout.
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Status polls performed by the answer wait loop.
    pub const POLL_ATTEMPTS: u32 = 30;

    /// Delay between status polls.
    pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

    /// Presigned-URL validity used for cover images.
    pub const COVER_VALIDITY_DAYS: u32 = 365;
}

/// Configuration for the Vectorator client.
///
/// # Examples
///
/// ```rust
/// use vectorator_client::VectoratorConfig;
/// use std::time::Duration;
///
/// let config = VectoratorConfig::builder()
///     .with_app_name("myapp")
///     .with_default_user("alice")
///     .with_timeout(Duration::from_secs(45))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.app_name, "myapp");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "VectoratorBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct VectoratorConfig {
    /// Base URL of the Vectorator service.
    #[builder(setter(custom), default = "VectoratorConfig::default_base_url()")]
    pub base_url: Url,
    /// Application name; the first half of every tenant scope.
    pub app_name: String,
    /// Fallback user identifier applied when a call supplies none.
    #[builder(default)]
    pub default_user: Option<String>,
    /// Request timeout duration.
    #[builder(default = "defaults::TIMEOUT")]
    pub timeout: Duration,
    /// Connection timeout duration.
    #[builder(default = "defaults::CONNECT_TIMEOUT")]
    pub connect_timeout: Duration,
    /// User agent string for requests.
    #[builder(default = "VectoratorConfig::default_user_agent()")]
    pub user_agent: String,
    /// Status polls performed by the answer wait loop.
    #[builder(default = "defaults::POLL_ATTEMPTS")]
    pub poll_attempts: u32,
    /// Delay between status polls; keeps the wait loop from becoming a
    /// request storm.
    #[builder(default = "defaults::POLL_INTERVAL")]
    pub poll_interval: Duration,
}

impl VectoratorConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> VectoratorBuilder {
        VectoratorBuilder::default()
    }

    /// Derives the tenant scope for an optional explicit user, falling back
    /// to the configured default user.
    pub fn tenant_scope(
        &self,
        explicit_user: Option<&str>,
    ) -> Result<TenantScope, TenantScopeError> {
        TenantScope::derive(
            &self.app_name,
            explicit_user.unwrap_or(""),
            self.default_user.as_deref().unwrap_or(""),
        )
    }

    fn default_base_url() -> Url {
        defaults::BASE_URL.parse().expect("default URL is valid")
    }

    fn default_user_agent() -> String {
        format!("vectorator-client/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl VectoratorBuilder {
    /// Sets the base URL of the Vectorator service.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, Error> {
        self.base_url = Some(
            url.parse()
                .map_err(|err| Error::config(format!("invalid base URL '{url}': {err}")))?,
        );
        Ok(self)
    }

    fn validate_config(&self) -> Result<(), String> {
        if let Some(app_name) = &self.app_name {
            if app_name.is_empty() {
                return Err("Application name must not be empty".to_string());
            }
        }

        if let Some(timeout) = &self.timeout {
            if timeout.is_zero() {
                return Err("Timeout must be greater than 0".to_string());
            }
        }

        if let Some(connect_timeout) = &self.connect_timeout {
            if connect_timeout.is_zero() {
                return Err("Connect timeout must be greater than 0".to_string());
            }
        }

        if let Some(poll_attempts) = &self.poll_attempts {
            if *poll_attempts == 0 {
                return Err("Poll attempts must be greater than 0".to_string());
            }
        }

        if let Some(poll_interval) = &self.poll_interval {
            if poll_interval.is_zero() {
                return Err("Poll interval must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl From<VectoratorBuilderError> for Error {
    fn from(err: VectoratorBuilderError) -> Self {
        Self::config(err.to_string())
    }
}

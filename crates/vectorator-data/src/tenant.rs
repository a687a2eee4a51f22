//! Tenant scope derivation.
//!
//! Every resource on the backend (projects, documents, chats) is partitioned
//! by an opaque tenant key derived from the application name and an end-user
//! identifier. The derivation is pure and deterministic; it never touches
//! the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a tenant scope cannot be derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenantScopeError {
    /// The application name was empty.
    #[error("an application name is required to derive a tenant scope")]
    MissingAppName,
    /// Neither an explicit nor a default user identifier was supplied.
    #[error("a user identifier is required when no default is configured")]
    MissingUserId,
}

/// Opaque tenant key partitioning all server-side resources per caller.
///
/// The key is `{app_name}_{user}`, where the user is the explicit identifier
/// if one was given, otherwise the configured default.
///
/// # Examples
///
/// ```rust
/// use vectorator_data::TenantScope;
///
/// let scope = TenantScope::derive("myapp", "alice", "").unwrap();
/// assert_eq!(scope.as_str(), "myapp_alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantScope(String);

impl TenantScope {
    /// Derives a tenant scope from an application name and user identifiers.
    ///
    /// The explicit user wins over the default; an empty string counts as
    /// absent for both.
    ///
    /// # Errors
    ///
    /// Returns [`TenantScopeError::MissingAppName`] if `app_name` is empty,
    /// and [`TenantScopeError::MissingUserId`] if both user identifiers are
    /// empty.
    pub fn derive(
        app_name: &str,
        explicit_user: &str,
        default_user: &str,
    ) -> Result<Self, TenantScopeError> {
        if app_name.is_empty() {
            return Err(TenantScopeError::MissingAppName);
        }

        let user = if !explicit_user.is_empty() {
            explicit_user
        } else if !default_user.is_empty() {
            default_user
        } else {
            return Err(TenantScopeError::MissingUserId);
        };

        Ok(Self(format!("{app_name}_{user}")))
    }

    /// Returns the derived key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TenantScope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

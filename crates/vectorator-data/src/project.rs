//! Project entity.

use serde::{Deserialize, Serialize};

use crate::tenant::TenantScope;

/// A per-tenant container for documents, upload requests and chats.
///
/// Projects are created by explicit user action; deleting one cascades to
/// its documents and chats on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier.
    pub id: i64,
    /// Project name, unique per tenant.
    pub name: String,
    /// Tenant the project belongs to.
    pub tenant_scope: TenantScope,
}

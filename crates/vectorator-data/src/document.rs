//! Document entity.

use serde::{Deserialize, Serialize};

use crate::tenant::TenantScope;

/// An ingested file, immutable once created.
///
/// Documents are referenced (not owned) by chat messages and search results
/// as supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Server-assigned identifier.
    pub id: i64,
    /// Original filename as uploaded.
    pub filename: String,
    /// Tenant the document belongs to.
    pub tenant_scope: TenantScope,
    /// Project the document was ingested into.
    pub project_id: i64,
    /// Upload request that produced this document.
    pub upload_request_id: i64,
}

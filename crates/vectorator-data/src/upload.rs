//! Document upload request entity.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::tenant::TenantScope;

/// Handle for a batch ingestion job.
///
/// Created when files are submitted; mutated only by the backend, which
/// flips `processed` to `true` once ingestion finished and sets
/// `error_message` on failure. The client never polls upload requests on the
/// caller's behalf; re-fetch to observe progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUploadRequest {
    /// Server-assigned identifier.
    pub id: i64,
    /// Tenant the request belongs to.
    pub tenant_scope: TenantScope,
    /// Project the documents are ingested into.
    pub project_id: i64,
    /// Whether the backend finished processing the batch.
    #[serde(default)]
    pub processed: bool,
    /// Submission time.
    pub created_at: Timestamp,
    /// Failure detail, set by the backend when ingestion failed.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl DocumentUploadRequest {
    /// Returns whether the backend finished processing the batch.
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Returns whether ingestion reported a failure.
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}

//! Route table for the Vectorator HTTP surface.
//!
//! Every endpoint is described as data (method plus path segments) so that
//! schema drift on the backend is a table diff here, not a new procedure.
//! Segments are percent-encoded when the URL is assembled; trailing slashes
//! are significant to the backend's router and encoded per route.

use reqwest::Method;
use vectorator_data::TenantScope;

use crate::client::stream::StreamMode;

/// One operation on the Vectorator HTTP surface.
#[derive(Debug)]
pub(crate) enum Route<'a> {
    /// `POST /{tenant}/{project}/`
    ProjectCreate {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `DELETE /{tenant}/{project}/`
    ProjectDelete {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `GET /projects/{tenant}/`
    ProjectList { tenant: &'a TenantScope },
    /// `POST /documents/{tenant}/{project}/upload/`
    DocumentUpload {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `GET /documents/{tenant}/{project}/uploadrequests`
    UploadRequestList {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `GET /documents/{tenant}/{project}/uploadrequests/{id}`
    UploadRequestGet {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `GET /documents/{tenant}/{project}/s3files`
    FileList {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `GET /documents/{tenant}/{project}/{id}`
    DocumentGet {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `DELETE /documents/{tenant}/{project}/{id}`
    DocumentDelete {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `GET /documents/{tenant}/{project}/presigned_url/{filename}`
    PresignedUrl {
        tenant: &'a TenantScope,
        project: &'a str,
        filename: &'a str,
    },
    /// `GET /documents/{tenant}/{project}/presigned_url/{basename}/{page}.png`
    PdfPageImage {
        tenant: &'a TenantScope,
        project: &'a str,
        basename: &'a str,
        page: u32,
    },
    /// `GET /documents/{tenant}/{project}/quicksearch/{query}`
    QuickSearch {
        tenant: &'a TenantScope,
        project: &'a str,
        query: &'a str,
    },
    /// `GET /chat/{tenant}/{project}/`
    ChatList {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `POST /chat/{tenant}/{project}/`
    ChatCreate {
        tenant: &'a TenantScope,
        project: &'a str,
    },
    /// `GET /chat/{tenant}/{project}/{id}`
    ChatGet {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `PUT /chat/{tenant}/{project}/{id}`
    ChatRename {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `DELETE /chat/{tenant}/{project}/{id}`
    ChatDelete {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `GET /chat/{tenant}/{project}/status/{id}`
    ChatStatus {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `POST /chat/{tenant}/{project}/{id}/message`
    ChatMessageAdd {
        tenant: &'a TenantScope,
        project: &'a str,
        id: i64,
    },
    /// `POST /stream/{tenant}/{project}/[tokens|events]`
    StreamAnswer {
        tenant: &'a TenantScope,
        project: &'a str,
        mode: StreamMode,
    },
}

impl Route<'_> {
    /// Returns the HTTP method of this route.
    pub(crate) fn method(&self) -> Method {
        match self {
            Route::ProjectCreate { .. }
            | Route::DocumentUpload { .. }
            | Route::ChatCreate { .. }
            | Route::ChatMessageAdd { .. }
            | Route::StreamAnswer { .. } => Method::POST,
            Route::ProjectDelete { .. }
            | Route::DocumentDelete { .. }
            | Route::ChatDelete { .. } => Method::DELETE,
            Route::ChatRename { .. } => Method::PUT,
            _ => Method::GET,
        }
    }

    /// Returns the path segments of this route, in order and unencoded.
    pub(crate) fn segments(&self) -> Vec<String> {
        match self {
            Route::ProjectCreate { tenant, project } | Route::ProjectDelete { tenant, project } => {
                vec![tenant.to_string(), (*project).to_string()]
            }
            Route::ProjectList { tenant } => {
                vec!["projects".to_string(), tenant.to_string()]
            }
            Route::DocumentUpload { tenant, project } => {
                documents(tenant, project, vec!["upload".to_string()])
            }
            Route::UploadRequestList { tenant, project } => {
                documents(tenant, project, vec!["uploadrequests".to_string()])
            }
            Route::UploadRequestGet {
                tenant,
                project,
                id,
            } => documents(
                tenant,
                project,
                vec!["uploadrequests".to_string(), id.to_string()],
            ),
            Route::FileList { tenant, project } => {
                documents(tenant, project, vec!["s3files".to_string()])
            }
            Route::DocumentGet {
                tenant,
                project,
                id,
            }
            | Route::DocumentDelete {
                tenant,
                project,
                id,
            } => documents(tenant, project, vec![id.to_string()]),
            Route::PresignedUrl {
                tenant,
                project,
                filename,
            } => documents(
                tenant,
                project,
                vec!["presigned_url".to_string(), (*filename).to_string()],
            ),
            Route::PdfPageImage {
                tenant,
                project,
                basename,
                page,
            } => documents(
                tenant,
                project,
                vec![
                    "presigned_url".to_string(),
                    (*basename).to_string(),
                    format!("{page}.png"),
                ],
            ),
            Route::QuickSearch {
                tenant,
                project,
                query,
            } => documents(
                tenant,
                project,
                vec!["quicksearch".to_string(), (*query).to_string()],
            ),
            Route::ChatList { tenant, project } | Route::ChatCreate { tenant, project } => {
                chat(tenant, project, Vec::new())
            }
            Route::ChatGet {
                tenant,
                project,
                id,
            }
            | Route::ChatRename {
                tenant,
                project,
                id,
            }
            | Route::ChatDelete {
                tenant,
                project,
                id,
            } => chat(tenant, project, vec![id.to_string()]),
            Route::ChatStatus {
                tenant,
                project,
                id,
            } => chat(tenant, project, vec!["status".to_string(), id.to_string()]),
            Route::ChatMessageAdd {
                tenant,
                project,
                id,
            } => chat(tenant, project, vec![id.to_string(), "message".to_string()]),
            Route::StreamAnswer {
                tenant,
                project,
                mode,
            } => {
                let mut segments = vec![
                    "stream".to_string(),
                    tenant.to_string(),
                    (*project).to_string(),
                ];
                if let Some(suffix) = mode.route_suffix() {
                    segments.push(suffix.to_string());
                }
                segments
            }
        }
    }

    /// Returns whether the backend expects a trailing slash on this route.
    pub(crate) fn trailing_slash(&self) -> bool {
        match self {
            Route::ProjectCreate { .. }
            | Route::ProjectDelete { .. }
            | Route::ProjectList { .. }
            | Route::DocumentUpload { .. }
            | Route::ChatList { .. }
            | Route::ChatCreate { .. } => true,
            Route::StreamAnswer { mode, .. } => mode.route_suffix().is_none(),
            _ => false,
        }
    }
}

/// Prefixes `rest` with `documents/{tenant}/{project}`.
fn documents(tenant: &TenantScope, project: &str, rest: Vec<String>) -> Vec<String> {
    prefixed("documents", tenant, project, rest)
}

/// Prefixes `rest` with `chat/{tenant}/{project}`.
fn chat(tenant: &TenantScope, project: &str, rest: Vec<String>) -> Vec<String> {
    prefixed("chat", tenant, project, rest)
}

fn prefixed(head: &str, tenant: &TenantScope, project: &str, rest: Vec<String>) -> Vec<String> {
    let mut segments = vec![head.to_string(), tenant.to_string(), project.to_string()];
    segments.extend(rest);
    segments
}

//! Document, upload and retrieval-URL operations.

use reqwest::multipart::{Form, Part};
use vectorator_data::{Document, DocumentUploadRequest, FileUpload, QuickSearchDocument, TenantScope};

use super::{expect_success, VectoratorClient};
use crate::config::defaults;
use crate::error::{Error, Result};
use crate::route::Route;
use crate::TRACING_TARGET_DOCUMENTS;

impl VectoratorClient {
    /// Submits files for ingestion into a project.
    ///
    /// Returns the upload request as a job handle; ingestion continues
    /// asynchronously on the backend, and this client does not poll for its
    /// completion. Re-fetch the request to observe progress.
    pub async fn upload_documents(
        &self,
        tenant: &TenantScope,
        project: &str,
        files: Vec<FileUpload>,
        high_res_mode: bool,
    ) -> Result<DocumentUploadRequest> {
        tracing::debug!(
            target: TRACING_TARGET_DOCUMENTS,
            tenant = %tenant,
            project,
            file_count = files.len(),
            high_res_mode,
            "Uploading documents"
        );

        let mut form = Form::new();
        for file in files {
            let mut part = Part::bytes(file.data.to_vec()).file_name(file.filename);
            if let Some(content_type) = &file.content_type {
                part = part.mime_str(content_type).map_err(|err| {
                    Error::config(format!("invalid content type '{content_type}': {err}"))
                })?;
            }
            form = form.part("upload_files", part);
        }

        let response = self
            .request(&Route::DocumentUpload { tenant, project })?
            .query(&[("highresmode", high_res_mode)])
            .multipart(form)
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Lists the project's upload requests.
    pub async fn list_upload_requests(
        &self,
        tenant: &TenantScope,
        project: &str,
    ) -> Result<Vec<DocumentUploadRequest>> {
        let response = self
            .request(&Route::UploadRequestList { tenant, project })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Fetches a single upload request by id.
    pub async fn get_upload_request(
        &self,
        tenant: &TenantScope,
        project: &str,
        id: i64,
    ) -> Result<DocumentUploadRequest> {
        let response = self
            .request(&Route::UploadRequestGet {
                tenant,
                project,
                id,
            })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Lists the project's stored object keys.
    pub async fn list_files(&self, tenant: &TenantScope, project: &str) -> Result<Vec<String>> {
        let response = self
            .request(&Route::FileList { tenant, project })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Fetches a single document by id.
    pub async fn get_document(
        &self,
        tenant: &TenantScope,
        project: &str,
        id: i64,
    ) -> Result<Document> {
        let response = self
            .request(&Route::DocumentGet {
                tenant,
                project,
                id,
            })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }

    /// Deletes a document by id.
    pub async fn delete_document(
        &self,
        tenant: &TenantScope,
        project: &str,
        id: i64,
    ) -> Result<()> {
        tracing::debug!(
            target: TRACING_TARGET_DOCUMENTS,
            tenant = %tenant,
            project,
            id,
            "Deleting document"
        );

        let response = self
            .request(&Route::DocumentDelete {
                tenant,
                project,
                id,
            })?
            .send()
            .await?;

        expect_success(response).await?;
        Ok(())
    }

    /// Returns a time-limited retrieval URL for a stored file.
    ///
    /// The validity is advisory; the backend enforces its own default when
    /// `validity_days` is `None`.
    pub async fn presigned_url(
        &self,
        tenant: &TenantScope,
        project: &str,
        filename: &str,
        validity_days: Option<u32>,
    ) -> Result<String> {
        let mut request = self.request(&Route::PresignedUrl {
            tenant,
            project,
            filename,
        })?;
        if let Some(days) = validity_days {
            request = request.query(&[("validityDays", days)]);
        }

        let response = request.send().await?;
        let text = expect_success(response).await?.text().await?;

        Ok(strip_quotes(&text).to_owned())
    }

    /// Returns a long-lived retrieval URL for a file's cover image.
    ///
    /// The cover is stored next to the file as `{filename}.png`.
    pub async fn cover_image_url(
        &self,
        tenant: &TenantScope,
        project: &str,
        filename: &str,
    ) -> Result<String> {
        let cover = format!("{filename}.png");
        self.presigned_url(tenant, project, &cover, Some(defaults::COVER_VALIDITY_DAYS))
            .await
    }

    /// Returns a retrieval URL for one page of a PDF, rendered as PNG.
    ///
    /// The page image is addressed by the PDF's basename: any directory
    /// component is discarded and the `.pdf` suffix stripped before the
    /// path is built.
    ///
    /// # Errors
    ///
    /// Returns a configuration error without contacting the backend when
    /// `pdf_filename` does not end in `.pdf`.
    pub async fn pdf_page_image_url(
        &self,
        tenant: &TenantScope,
        project: &str,
        pdf_filename: &str,
        page: u32,
    ) -> Result<String> {
        let basename = pdf_basename(pdf_filename)?;

        let response = self
            .request(&Route::PdfPageImage {
                tenant,
                project,
                basename,
                page,
            })?
            .send()
            .await?;
        let text = expect_success(response).await?.text().await?;

        Ok(strip_quotes(&text).to_owned())
    }

    /// Runs a quick search over the project's documents.
    ///
    /// Results arrive ranked by the backend; their order is preserved
    /// as-is and never re-sorted client-side.
    pub async fn quick_search(
        &self,
        tenant: &TenantScope,
        project: &str,
        query: &str,
    ) -> Result<Vec<QuickSearchDocument>> {
        let response = self
            .request(&Route::QuickSearch {
                tenant,
                project,
                query,
            })?
            .send()
            .await?;

        Ok(expect_success(response).await?.json().await?)
    }
}

/// Strips one pair of surrounding quote characters.
///
/// Presigned URLs arrive as a JSON-quoted plain-text body; anything else is
/// passed through untouched.
fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Extracts the page-addressing basename from a PDF filename.
fn pdf_basename(filename: &str) -> Result<&str> {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    name.strip_suffix(".pdf")
        .filter(|basename| !basename.is_empty())
        .ok_or_else(|| Error::config(format!("expected a .pdf filename, got '{filename}'")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::{Multipart, Path, Query};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use vectorator_data::FileUpload;

    use super::super::testing::client_for;
    use super::*;

    #[test]
    fn strip_quotes_removes_one_pair_only() {
        assert_eq!(strip_quotes("\"http://x\""), "http://x");
        assert_eq!(strip_quotes("\"\"http://x\"\""), "\"http://x\"");
        assert_eq!(strip_quotes("http://x"), "http://x");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn pdf_basename_discards_directories_and_suffix() {
        assert_eq!(pdf_basename("book.pdf").unwrap(), "book");
        assert_eq!(pdf_basename("folder/book.pdf").unwrap(), "book");
        assert_eq!(pdf_basename("a/b/c/book.pdf").unwrap(), "book");
    }

    #[test]
    fn pdf_basename_rejects_other_filenames() {
        assert!(pdf_basename("book.txt").is_err());
        assert!(pdf_basename("book").is_err());
        assert!(pdf_basename(".pdf").is_err());
    }

    #[tokio::test]
    async fn upload_returns_job_handle() {
        let router = Router::new().route(
            "/documents/{tenant}/{project}/upload/",
            axum::routing::post(
                |Query(params): Query<HashMap<String, String>>, mut multipart: Multipart| async move {
                    assert_eq!(params.get("highresmode").map(String::as_str), Some("true"));

                    let mut filenames = Vec::new();
                    while let Some(field) = multipart.next_field().await.unwrap() {
                        assert_eq!(field.name(), Some("upload_files"));
                        filenames.push(field.file_name().unwrap().to_string());
                        field.bytes().await.unwrap();
                    }
                    assert_eq!(filenames, vec!["handbook.pdf", "notes.txt"]);

                    Json(json!({
                        "id": 3,
                        "tenant_scope": "myapp_alice",
                        "project_id": 7,
                        "processed": false,
                        "created_at": "2024-05-01T12:00:00Z"
                    }))
                },
            ),
        );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let files = vec![
            FileUpload::new("handbook.pdf", b"%PDF-1.4".to_vec())
                .with_content_type("application/pdf"),
            FileUpload::new("notes.txt", b"hello".to_vec()),
        ];
        let request = client
            .upload_documents(&tenant, "library", files, true)
            .await
            .unwrap();

        assert_eq!(request.id, 3);
        assert!(!request.is_processed());
    }

    #[tokio::test]
    async fn presigned_url_strips_quotes_exactly_once() {
        let router = Router::new().route(
            "/documents/{tenant}/{project}/presigned_url/{filename}",
            get(
                |Path((_, _, filename)): Path<(String, String, String)>,
                 Query(params): Query<HashMap<String, String>>| async move {
                    assert_eq!(params.get("validityDays").map(String::as_str), Some("7"));
                    format!("\"http://signed/{filename}\"")
                },
            ),
        );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let url = client
            .presigned_url(&tenant, "library", "handbook.pdf", Some(7))
            .await
            .unwrap();

        assert_eq!(url, "http://signed/handbook.pdf");
    }

    #[tokio::test]
    async fn cover_image_url_presigns_png_sibling_for_a_year() {
        let router = Router::new().route(
            "/documents/{tenant}/{project}/presigned_url/{filename}",
            get(
                |Path((_, _, filename)): Path<(String, String, String)>,
                 Query(params): Query<HashMap<String, String>>| async move {
                    assert_eq!(filename, "handbook.pdf.png");
                    assert_eq!(params.get("validityDays").map(String::as_str), Some("365"));
                    "\"http://signed/cover\"".to_string()
                },
            ),
        );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let url = client
            .cover_image_url(&tenant, "library", "handbook.pdf")
            .await
            .unwrap();

        assert_eq!(url, "http://signed/cover");
    }

    #[tokio::test]
    async fn pdf_page_image_url_addresses_page_by_basename() {
        let router = Router::new().route(
            "/documents/{tenant}/{project}/presigned_url/{basename}/{page}",
            get(
                |Path((_, _, basename, page)): Path<(String, String, String, String)>| async move {
                    assert_eq!(basename, "book");
                    assert_eq!(page, "3.png");
                    "\"http://signed/book/3.png\"".to_string()
                },
            ),
        );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let url = client
            .pdf_page_image_url(&tenant, "library", "folder/book.pdf", 3)
            .await
            .unwrap();

        assert_eq!(url, "http://signed/book/3.png");
    }

    #[tokio::test]
    async fn pdf_page_image_url_rejects_non_pdf_without_a_request() {
        let (client, _addr) = client_for(Router::new()).await;
        let tenant = client.tenant(None).unwrap();

        let err = client
            .pdf_page_image_url(&tenant, "library", "book.txt", 3)
            .await
            .unwrap_err();

        assert!(err.is_config_error());
    }

    #[tokio::test]
    async fn quick_search_preserves_server_order() {
        let router = Router::new().route(
            "/documents/{tenant}/{project}/quicksearch/{query}",
            get(|| async {
                Json(json!([
                    {"score": 5.0, "filename": "a.txt", "content": "a", "full_content": "aa", "timestamp": "2024-05-01T12:00:00Z"},
                    {"score": 9.0, "filename": "b.txt", "content": "b", "full_content": "bb", "timestamp": "2024-05-01T12:00:00Z"},
                    {"score": 1.0, "filename": "c.txt", "content": "c", "full_content": "cc", "timestamp": "2024-05-01T12:00:00Z"},
                ]))
            }),
        );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let hits = client
            .quick_search(&tenant, "library", "policy")
            .await
            .unwrap();

        let scores: Vec<f64> = hits.iter().map(|hit| hit.score).collect();
        assert_eq!(scores, vec![5.0, 9.0, 1.0]);
    }

    #[tokio::test]
    async fn fetches_documents_and_files() {
        let router = Router::new()
            .route(
                "/documents/{tenant}/{project}/s3files",
                get(|| async { Json(json!(["handbook.pdf", "notes.txt"])) }),
            )
            .route(
                "/documents/{tenant}/{project}/{id}",
                get(|Path((_, _, id)): Path<(String, String, i64)>| async move {
                    Json(json!({
                        "id": id,
                        "filename": "handbook.pdf",
                        "tenant_scope": "myapp_alice",
                        "project_id": 7,
                        "upload_request_id": 3
                    }))
                })
                .delete(|| async { axum::http::StatusCode::NO_CONTENT }),
            );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let files = client.list_files(&tenant, "library").await.unwrap();
        assert_eq!(files, vec!["handbook.pdf", "notes.txt"]);

        let document = client.get_document(&tenant, "library", 11).await.unwrap();
        assert_eq!(document.id, 11);

        client.delete_document(&tenant, "library", 11).await.unwrap();
    }

    #[tokio::test]
    async fn upload_requests_round_trip() {
        let router = Router::new()
            .route(
                "/documents/{tenant}/{project}/uploadrequests",
                get(|| async {
                    Json(json!([{
                        "id": 3,
                        "tenant_scope": "myapp_alice",
                        "project_id": 7,
                        "processed": true,
                        "created_at": "2024-05-01T12:00:00Z"
                    }]))
                }),
            )
            .route(
                "/documents/{tenant}/{project}/uploadrequests/{id}",
                get(|Path((_, _, id)): Path<(String, String, i64)>| async move {
                    Json(json!({
                        "id": id,
                        "tenant_scope": "myapp_alice",
                        "project_id": 7,
                        "processed": false,
                        "created_at": "2024-05-01T12:00:00Z",
                        "error_message": "unsupported file type"
                    }))
                }),
            );
        let (client, _addr) = client_for(router).await;
        let tenant = client.tenant(None).unwrap();

        let requests = client.list_upload_requests(&tenant, "library").await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].is_processed());

        let request = client.get_upload_request(&tenant, "library", 4).await.unwrap();
        assert_eq!(request.id, 4);
        assert!(request.has_error());
    }
}

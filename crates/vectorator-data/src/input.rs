//! Client-side input for document uploads.

use bytes::Bytes;

/// A file staged for a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Filename reported to the backend.
    pub filename: String,
    /// MIME type, if the caller knows it.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Bytes,
}

impl FileUpload {
    /// Creates an upload from a filename and raw contents.
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Sets the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

//! Client-side validation that runs before any request is issued.
//!
//! Payloads with missing required fields or oversized uploads are refused
//! locally, so the caller gets one precise error instead of a server
//! round-trip. Field rules live on the payload types as `validator`
//! derives; this module adds the upload limits and the glue that turns
//! `validator` output into [`CoreError`].

use validator::Validate;

use crate::error::CoreError;

/// Maximum number of supporting documents per application.
pub const MAX_DOCUMENTS: usize = 3;

/// Maximum size of a single uploaded file (10 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// An in-memory file selected for upload.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    /// MIME type sent with the multipart part, e.g. `application/pdf`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Run a payload's `validator` rules, flattening failures into one
/// message.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), CoreError> {
    request
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}

/// Per-file checks shared by every upload: a name, some bytes, and the
/// size cap.
pub fn validate_files(files: &[DocumentUpload]) -> Result<(), CoreError> {
    for file in files {
        if file.file_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Uploaded file is missing a name".to_string(),
            ));
        }
        if file.bytes.is_empty() {
            return Err(CoreError::Validation(format!(
                "File '{}' is empty",
                file.file_name
            )));
        }
        if file.bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(CoreError::Validation(format!(
                "File '{}' exceeds the {} MiB limit",
                file.file_name,
                MAX_DOCUMENT_BYTES / (1024 * 1024)
            )));
        }
    }

    Ok(())
}

/// Checks for an application's supporting documents: the per-file rules
/// plus the count cap.
pub fn validate_documents(documents: &[DocumentUpload]) -> Result<(), CoreError> {
    if documents.len() > MAX_DOCUMENTS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_DOCUMENTS} documents may be attached ({} given)",
            documents.len()
        )));
    }

    validate_files(documents)
}

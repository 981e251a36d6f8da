//! Wire types for the splitter backend

use crate::error::SplitterError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

pub const PDF_MIME: &str = "application/pdf";

/// Body returned by `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub pdf_base64: String,
    pub filename: String,
}

/// Body sent to `POST /extract-pages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    /// Server-side path, uploads directory joined with the stored filename
    pub filename: String,
    pub page_numbers: Vec<u32>,
}

impl ExtractRequest {
    pub fn to_json(&self) -> Result<String, SplitterError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Document as held client-side after a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub pdf_base64: String,
    pub filename: String,
}

impl From<UploadResponse> for UploadedDocument {
    fn from(resp: UploadResponse) -> Self {
        Self {
            pdf_base64: resp.pdf_base64,
            filename: resp.filename,
        }
    }
}

impl UploadedDocument {
    /// Raw PDF bytes for the rendering library
    pub fn decode(&self) -> Result<Vec<u8>, SplitterError> {
        STANDARD
            .decode(self.pdf_base64.trim())
            .map_err(|e| SplitterError::InvalidDocument(e.to_string()))
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", PDF_MIME, self.pdf_base64)
    }
}

//! Endpoint and presentation settings
//!
//! Every field has a default, so an empty object (or no object at all)
//! yields the hosted splitter API.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://pdf-splitter-api.onrender.com";
pub const DEFAULT_WORKER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js";

/// Settings for the splitter frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    /// Scheme and host of the splitter backend, no trailing slash needed
    pub base_url: String,
    pub upload_path: String,
    pub extract_path: String,
    /// Directory the backend stores uploads in, prefixed to filenames
    pub uploads_dir: String,
    /// Name offered in the browser save dialog
    pub download_name: String,
    /// Thumbnail width in CSS pixels
    pub thumbnail_width: u32,
    /// pdf.js worker script URL
    pub worker_src: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_path: "/upload".to_string(),
            extract_path: "/extract-pages".to_string(),
            uploads_dir: "./uploads".to_string(),
            download_name: "extracted_pages.pdf".to_string(),
            thumbnail_width: 250,
            worker_src: DEFAULT_WORKER_SRC.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn upload_url(&self) -> String {
        join_url(&self.base_url, &self.upload_path)
    }

    pub fn extract_url(&self) -> String {
        join_url(&self.base_url, &self.extract_path)
    }

    /// Path the backend expects for a previously uploaded file
    pub fn server_path(&self, filename: &str) -> String {
        format!("{}/{}", self.uploads_dir.trim_end_matches('/'), filename)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

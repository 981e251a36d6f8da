//! Page selection and extraction flow for the PDF splitter frontend
//!
//! This crate holds all client state without touching the browser:
//! - `UploadController`: chosen file and upload result
//! - `Viewer`: loaded document, page count and checked pages
//! - `SplitterState`: both wired together the way the page uses them
//!
//! Network calls and rendering happen in the caller; each operation is split
//! into a `begin_*` step that validates and produces the request, and a
//! `complete_*` / `fail_*` step that applies the outcome.

pub mod config;
pub mod error;
pub mod models;
pub mod selection;
pub mod session;
pub mod upload;
pub mod viewer;

pub use config::ApiConfig;
pub use error::{Operation, SplitterError};
pub use models::{ExtractRequest, UploadResponse, UploadedDocument, PDF_MIME, UPLOAD_FIELD};
pub use selection::PageSelection;
pub use session::SplitterState;
pub use upload::UploadController;
pub use viewer::Viewer;

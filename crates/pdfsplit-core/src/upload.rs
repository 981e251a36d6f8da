//! Upload controller state
//!
//! Holds the chosen file until it has been accepted by the backend, and the
//! encoded document the backend hands back. Transport is left to the caller:
//! `begin_submit` hands out the file to send and one of `complete_upload` /
//! `fail_upload` must follow.

use crate::error::{Operation, SplitterError};
use crate::models::{UploadResponse, UploadedDocument};

/// File-picker and upload state, generic over the file handle
#[derive(Debug, Clone)]
pub struct UploadController<F> {
    selected: Option<F>,
    document: Option<UploadedDocument>,
    uploaded: bool,
    pending: bool,
}

impl<F> Default for UploadController<F> {
    fn default() -> Self {
        Self {
            selected: None,
            document: None,
            uploaded: false,
            pending: false,
        }
    }
}

impl<F: Clone> UploadController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the picker's current file. Always clears the uploaded tick.
    pub fn choose_file(&mut self, file: Option<F>) {
        tracing::debug!(has_file = file.is_some(), "file chosen");
        self.selected = file;
        self.uploaded = false;
    }

    /// Start an upload, returning the file to send
    pub fn begin_submit(&mut self) -> Result<F, SplitterError> {
        if self.pending {
            tracing::warn!("upload rejected, previous upload still pending");
            return Err(SplitterError::RequestInFlight(Operation::Upload));
        }
        let file = self.selected.clone().ok_or(SplitterError::NoFileSelected)?;
        self.pending = true;
        Ok(file)
    }

    /// Apply a successful upload response
    pub fn complete_upload(&mut self, response: UploadResponse) -> UploadedDocument {
        let document = UploadedDocument::from(response);
        tracing::debug!(filename = %document.filename, "upload complete");
        self.document = Some(document.clone());
        self.selected = None;
        self.uploaded = true;
        self.pending = false;
        document
    }

    /// Record a failed upload; the chosen file and prior document are kept
    pub fn fail_upload(&mut self, err: &SplitterError) {
        tracing::warn!(error = %err, "upload failed");
        self.pending = false;
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn document(&self) -> Option<&UploadedDocument> {
        self.document.as_ref()
    }

    pub fn is_uploaded(&self) -> bool {
        self.uploaded
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

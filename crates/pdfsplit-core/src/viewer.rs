//! Viewer and page selector state
//!
//! Tracks the loaded document, the page count reported by the renderer and
//! the checked pages. Builds the extraction request; the caller performs it
//! and reports back with `complete_download` or `fail_download`.

use crate::config::ApiConfig;
use crate::error::{Operation, SplitterError};
use crate::models::{ExtractRequest, UploadedDocument};
use crate::selection::PageSelection;

#[derive(Debug, Clone, Default)]
pub struct Viewer {
    document: Option<UploadedDocument>,
    page_count: Option<u32>,
    selection: PageSelection,
    pending: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document. Checked pages belong to the old document and
    /// are dropped; the page count is unknown until reported.
    pub fn load_document(&mut self, document: UploadedDocument) {
        tracing::debug!(filename = %document.filename, "document loaded");
        if !self.selection.is_empty() {
            tracing::debug!(dropped = self.selection.len(), "selection discarded");
        }
        self.document = Some(document);
        self.page_count = None;
        self.selection.clear();
    }

    /// Record the renderer's page count and drop selections beyond it
    pub fn set_page_count(&mut self, page_count: u32) {
        let dropped = self.selection.retain_within(page_count);
        if dropped > 0 {
            tracing::debug!(dropped, page_count, "pruned out-of-range selections");
        }
        self.page_count = Some(page_count);
    }

    /// Page numbers to render, `1..=page_count`
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.page_count.unwrap_or(0)
    }

    pub fn toggle(&mut self, page: u32) -> Result<bool, SplitterError> {
        if self.document.is_none() {
            return Err(SplitterError::NoDocument);
        }
        let page_count = self.page_count.ok_or(SplitterError::PageCountUnknown)?;
        if page == 0 || page > page_count {
            return Err(SplitterError::PageOutOfRange { page, page_count });
        }
        Ok(self.selection.toggle(page))
    }

    /// Clear checked pages, used when a new file is chosen
    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    /// Build the extraction request for the current selection
    pub fn begin_download(&mut self, config: &ApiConfig) -> Result<ExtractRequest, SplitterError> {
        if self.pending {
            tracing::warn!("extraction rejected, previous extraction still pending");
            return Err(SplitterError::RequestInFlight(Operation::Extract));
        }
        let document = self.document.as_ref().ok_or(SplitterError::NoDocument)?;
        if self.selection.is_empty() {
            return Err(SplitterError::EmptySelection);
        }

        let request = ExtractRequest {
            filename: config.server_path(&document.filename),
            page_numbers: self.selection.to_vec(),
        };
        self.pending = true;
        Ok(request)
    }

    /// Apply a successful extraction: every checkbox is unchecked
    pub fn complete_download(&mut self) {
        tracing::debug!(pages = self.selection.len(), "extraction complete");
        self.selection.clear();
        self.pending = false;
    }

    pub fn fail_download(&mut self, err: &SplitterError) {
        tracing::warn!(error = %err, "extraction failed");
        self.pending = false;
    }

    pub fn document(&self) -> Option<&UploadedDocument> {
        self.document.as_ref()
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    pub fn selection(&self) -> &PageSelection {
        &self.selection
    }

    pub fn is_selected(&self, page: u32) -> bool {
        self.selection.contains(page)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

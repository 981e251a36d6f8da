//! Upload controller and viewer wired together

use crate::config::ApiConfig;
use crate::error::SplitterError;
use crate::models::{ExtractRequest, UploadResponse, UploadedDocument};
use crate::upload::UploadController;
use crate::viewer::Viewer;

/// Whole-page state: one upload form feeding one viewer
#[derive(Debug, Clone)]
pub struct SplitterState<F> {
    pub config: ApiConfig,
    pub upload: UploadController<F>,
    pub viewer: Viewer,
}

impl<F: Clone> SplitterState<F> {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            upload: UploadController::new(),
            viewer: Viewer::new(),
        }
    }

    /// A new file means the old checkboxes no longer apply
    pub fn choose_file(&mut self, file: Option<F>) {
        self.upload.choose_file(file);
        self.viewer.reset_selection();
    }

    pub fn begin_submit(&mut self) -> Result<F, SplitterError> {
        self.upload.begin_submit()
    }

    /// Store the response and hand the document to the viewer
    pub fn complete_upload(&mut self, response: UploadResponse) -> UploadedDocument {
        let document = self.upload.complete_upload(response);
        self.viewer.load_document(document.clone());
        document
    }

    pub fn fail_upload(&mut self, err: &SplitterError) {
        self.upload.fail_upload(err);
    }

    pub fn begin_download(&mut self) -> Result<ExtractRequest, SplitterError> {
        self.viewer.begin_download(&self.config)
    }
}

impl<F: Clone> Default for SplitterState<F> {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

use std::fmt;
use thiserror::Error;

/// Network operation a controller can have outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Extract,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Upload => f.write_str("upload"),
            Operation::Extract => f.write_str("extraction"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitterError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("An {0} request is already in progress")]
    RequestInFlight(Operation),

    #[error("No document loaded")]
    NoDocument,

    #[error("Page count not known yet")]
    PageCountUnknown,

    #[error("Page {page} is out of range (1-{page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },

    #[error("No checkboxes selected. Please select at least one page to download.")]
    EmptySelection,

    #[error("Invalid encoded document: {0}")]
    InvalidDocument(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with status {0}")]
    HttpStatus(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Failed to display document: {0}")]
    Render(String),
}

impl From<serde_json::Error> for SplitterError {
    fn from(err: serde_json::Error) -> Self {
        SplitterError::Serialization(err.to_string())
    }
}

impl SplitterError {
    /// User mistakes are logged as notices, everything else as errors
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SplitterError::NoFileSelected | SplitterError::EmptySelection
        )
    }
}

//! Error types for workbook loading and sheet selection.
//!
//! Every error is recovered at the interaction boundary: the webview shows a
//! transient toast, prior state (records, filters) is left unchanged, and the
//! user may retry. There is no crash path.

use thiserror::Error;

/// Errors raised while loading a workbook or decoding a sheet.
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("Unsupported file type: .{0}")]
    UnsupportedFormat(String),

    #[error("Could not read workbook: {0}")]
    DecodeError(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("No workbook loaded")]
    NoWorkbookLoaded,

    #[error("Workbook load superseded by a newer upload")]
    SupersededLoad,

    #[error("IO error: {0}")]
    Io(String),

    #[error("State error: {0}")]
    State(&'static str),
}

impl WorkbookError {
    /// True for the stale-load case the frontend drops silently instead of
    /// toasting.
    pub fn is_superseded(&self) -> bool {
        matches!(self, WorkbookError::SupersededLoad)
    }

    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WorkbookError::UnsupportedFormat(_) => "Upload an Excel (.xlsx) workbook.",
            WorkbookError::DecodeError(_) => {
                "Make sure the file is a valid Excel workbook and try again."
            }
            WorkbookError::SheetNotFound(_) => "Pick one of the sheets listed in the workbook.",
            WorkbookError::NoWorkbookLoaded => "Upload a workbook first.",
            WorkbookError::SupersededLoad => "A newer upload replaced this one; no action needed.",
            WorkbookError::Io(_) => "Check that the file still exists and is readable.",
            WorkbookError::State(_) => "Restart the application and try again.",
        }
    }
}

impl From<std::io::Error> for WorkbookError {
    fn from(err: std::io::Error) -> Self {
        WorkbookError::Io(err.to_string())
    }
}

/// Serializable error representation for IPC
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerError {
    pub message: String,
    pub superseded: bool,
    pub recovery_suggestion: String,
}

impl From<WorkbookError> for ViewerError {
    fn from(err: WorkbookError) -> Self {
        ViewerError {
            message: err.to_string(),
            superseded: err.is_superseded(),
            recovery_suggestion: err.recovery_suggestion().to_string(),
        }
    }
}

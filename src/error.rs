//! Error types for the sheet controller.
//!
//! Gesture loss and zero-length velocity spans are not errors; they are
//! handled inline. What remains are caller bugs and config loading failures.

use thiserror::Error;

/// Errors surfaced by the sheet controller and its configuration
#[derive(Error, Debug)]
pub enum SheetError {
    /// A snap state name outside `collapsed`, `half`, `full`
    #[error("Invalid snap state: {0:?}")]
    InvalidSnapState(String),

    /// Container geometry that cannot hold three ordered snap offsets
    #[error("Invalid geometry: container height {height}px ({reason})")]
    InvalidGeometry { height: f32, reason: &'static str },

    /// Config values that fail validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The controller was disposed and no longer accepts requests
    #[error("Controller has been disposed")]
    Disposed,

    /// Re-entrant call through a handle while the controller is dispatching
    #[error("Controller is busy dispatching another event")]
    Busy,
}

/// Result type alias for sheet operations
pub type SheetResult<T> = Result<T, SheetError>;

impl SheetError {
    /// True if this error reports a caller bug rather than an environment failure
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            SheetError::InvalidSnapState(_)
                | SheetError::InvalidGeometry { .. }
                | SheetError::Disposed
                | SheetError::Busy
        )
    }
}

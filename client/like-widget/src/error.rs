//! Error types for the like widget.
//!
//! Every failure here is recovered at the widget boundary: the displayed
//! count stays where it was and the error goes to the log, never to the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    /// Network call failed before producing a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {0}")]
    Status(u16),

    /// Local store I/O failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Stored value was not a non-negative integer
    #[error("Unparsable stored count: {0}")]
    Parse(String),

    /// Missing or empty identifier
    #[error("{0}")]
    InvalidArgument(String),
}

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;

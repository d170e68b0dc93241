//! Error types for the font-color filter

use thiserror::Error;

/// Message shown to callers whenever a filter call fails
pub const PROCESSING_ERROR_MESSAGE: &str =
    "Could not filter the range by font color. Check the color, range and coordinates.";

/// Rejected arguments, detected before the host is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Color is not a `#RRGGBB` string
    #[error("bad color format")]
    BadColorFormat,

    /// Block is empty or not rectangular
    #[error("bad range")]
    BadRange,

    /// Coordinates are not positive integers, or the block runs off the sheet
    #[error("bad coordinates")]
    BadCoordinates,

    /// A string argument was expected
    #[error("expected a string, got {0}")]
    NotAString(&'static str),
}

/// Failure reported by, or while talking to, the host spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host could not resolve the range address
    #[error("cannot resolve range {range}: {message}")]
    Resolve { range: String, message: String },

    /// Reading font colors or values failed
    #[error("failed to read {what}: {message}")]
    Read { what: &'static str, message: String },

    /// The host returned a grid of the wrong shape
    #[error("{what} grid is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    Shape {
        what: &'static str,
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

impl HostError {
    /// Create a read error
    pub fn read<S: Into<String>>(what: &'static str, message: S) -> Self {
        HostError::Read {
            what,
            message: message.into(),
        }
    }
}

/// Detailed failure of a filter call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("host access failed: {0}")]
    HostAccess(#[from] HostError),
}

/// The only error callers of [`filter_by_color`](crate::filter_by_color) see
///
/// It carries no detail; the underlying [`FilterError`] is logged instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}", message = PROCESSING_ERROR_MESSAGE)]
pub struct ProcessingError;

/// Errors loading or saving a sheet snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad cell address in the snapshot
    #[error("Invalid cell '{address}': {source}")]
    Cell {
        address: String,
        #[source]
        source: inkfilter_core::Error,
    },
}

/// Result alias for detailed filter operations
pub type FilterResult<T> = std::result::Result<T, FilterError>;

//! Error kinds shared by the grid store and pattern codec

use thiserror::Error;

/// Errors produced by grid operations and pattern decoding.
///
/// None of these are fatal: callers either surface them (pattern loads) or
/// recover locally by ignoring the interaction (out-of-range edits).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({row}, {col}) out of range for {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("malformed pattern: {0}")]
    MalformedPattern(String),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
}

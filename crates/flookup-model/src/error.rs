//! Error taxonomy for the lookup boundary.
//!
//! The hosting formula layer expects a display value, never a fault, so
//! every variant's `Display` output is the exact sentinel text shown in a
//! cell. Parameter and range errors are detected before any scoring work;
//! `Internal` covers unexpected failures caught at the boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Query, table, or column index missing from the call.
    #[error("#ERROR: Missing required parameters")]
    MissingParameters,
    /// Table is empty, ragged, or has no columns.
    #[error("#ERROR: Invalid table array")]
    InvalidTable,
    /// Target column outside `[1, width]`.
    #[error("#ERROR: Column index out of range")]
    ColumnOutOfRange,
    /// Unexpected runtime failure during computation.
    #[error("#ERROR: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;

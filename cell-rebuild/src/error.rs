//! Error type for the cell rebuilder.
//!
//! Per-cell failures (glyph render failures, single-cell capacity
//! overflow) are logged via `tracing::warn!` and skipped rather than
//! raised here (spec.md §7: "single-cell failures are logged and
//! skipped"); `RebuildError` covers only the malformed-input case a
//! caller cannot recover from by retrying the frame.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RebuildError {
    #[error("screen snapshot row count {actual} does not match declared rows {declared}")]
    RowCountMismatch { declared: u16, actual: usize },
}

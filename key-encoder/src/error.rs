//! Error type for the encode entry point.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("buffer too small for encoded sequence: needed {needed}, available {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

//! # Error Types
//!
//! Errors raised while building shared entities from external encodings.

use thiserror::Error;

/// Errors decoding entities from their textual form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    /// Input was not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

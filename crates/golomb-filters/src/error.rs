//! Error types for the Golomb filter subsystem

use std::io;

use thiserror::Error;

/// Errors that can occur configuring or driving Golomb filters
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid/unsupported filterScripts parameter {0}")]
    InvalidFilterScripts(String),

    #[error("Invalid filter parameter: {0}")]
    InvalidParameter(String),

    #[error("Data provider error: {0}")]
    Data(#[from] DataError),
}

/// Errors from data providers
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Output not found: {txid}:{vout}")]
    OutputNotFound { txid: String, vout: u32 },

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Errors from the GCS encoder
#[derive(Debug, Error)]
pub enum GcsError {
    #[error("N value is too big, must be less than 2^32")]
    NTooBig,

    #[error("P value {0} is too big, must be 32 or less")]
    PTooBig(u8),

    #[error("Serialization error: {0}")]
    Serialization(#[from] io::Error),
}

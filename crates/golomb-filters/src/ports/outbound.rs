//! Outbound Ports (Driven Ports)
//!
//! Data the filter subsystem needs from the indexer.

use shared_types::{AddressDescriptor, Vin};

use crate::error::DataError;

/// Resolves the output an input spends (Driven Port)
///
/// Inputs only name an outpoint; the descriptor that goes into the filter
/// belongs to the spent output.
pub trait SpentOutputProvider: Send + Sync {
    /// Address descriptor of the output spent by `vin`.
    ///
    /// `Ok(None)` for inputs that spend nothing (coinbase).
    /// `DataError::OutputNotFound` when the outpoint is unknown.
    fn spent_addr_desc(&self, vin: &Vin) -> Result<Option<AddressDescriptor>, DataError>;
}

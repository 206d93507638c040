//! Inbound Ports (Driving Ports)
//!
//! The API block and mempool processing call into.

use shared_types::{Block, Tx};

use crate::error::FilterError;

/// Primary Golomb filter API (Driving Port)
pub trait GolombFilterApi: Send + Sync {
    /// Compute the filter for a block.
    ///
    /// Every output script and every spent output's descriptor is offered,
    /// each with its owning transaction. The filter is keyed by the block
    /// hash.
    ///
    /// # Returns
    /// `Ok(None)` when filters are disabled, nothing was admitted, the key
    /// is unusable or the encoder failed. Errors only come from the spent
    /// output lookup.
    fn block_filter(&self, block: &Block) -> Result<Option<Vec<u8>>, FilterError>;

    /// Hex encoded [`GolombFilterApi::block_filter`].
    fn block_filter_hex(&self, block: &Block) -> Result<Option<String>, FilterError> {
        Ok(self.block_filter(block)?.map(hex::encode))
    }

    /// Compute the filter for a single mempool transaction, keyed by its
    /// txid.
    ///
    /// # Returns
    /// Hex encoded filter, or an empty string when there is none.
    fn mempool_filter(&self, tx: &Tx) -> Result<String, FilterError>;
}

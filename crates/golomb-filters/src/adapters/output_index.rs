//! In-memory output index
//!
//! Implements `SpentOutputProvider` over outputs registered from blocks and
//! mempool transactions. Suited to tests, tools and hosts that keep the
//! UTXO working set in memory.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{AddressDescriptor, Block, Tx, Vin};
use tracing::debug;

use crate::error::DataError;
use crate::ports::SpentOutputProvider;

/// Outpoint: (txid, output index)
type OutPoint = (String, u32);

/// Output descriptors keyed by outpoint
#[derive(Debug, Default)]
pub struct InMemoryOutputIndex {
    outputs: RwLock<HashMap<OutPoint, AddressDescriptor>>,
}

impl InMemoryOutputIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every output of `tx`.
    pub fn index_tx(&self, tx: &Tx) {
        let mut outputs = self.outputs.write();
        for vout in &tx.vout {
            outputs.insert((tx.txid.clone(), vout.n), vout.addr_desc());
        }
    }

    /// Register every output of every transaction in `block`.
    pub fn index_block(&self, block: &Block) {
        for tx in &block.txs {
            self.index_tx(tx);
        }
        debug!(
            height = block.header.height,
            txs = block.txs.len(),
            "Indexed block outputs"
        );
    }

    /// Number of indexed outputs.
    pub fn len(&self) -> usize {
        self.outputs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.read().is_empty()
    }
}

impl SpentOutputProvider for InMemoryOutputIndex {
    fn spent_addr_desc(&self, vin: &Vin) -> Result<Option<AddressDescriptor>, DataError> {
        if vin.is_coinbase() {
            return Ok(None);
        }
        if !is_txid(&vin.txid) {
            return Err(DataError::QueryError(format!(
                "malformed outpoint txid {:?}",
                vin.txid
            )));
        }

        self.outputs
            .read()
            .get(&(vin.txid.clone(), vin.vout))
            .cloned()
            .map(Some)
            .ok_or_else(|| DataError::OutputNotFound {
                txid: vin.txid.clone(),
                vout: vin.vout,
            })
    }
}

/// 32 bytes, hex encoded.
fn is_txid(txid: &str) -> bool {
    hex::decode(txid).is_ok_and(|bytes| bytes.len() == 32)
}

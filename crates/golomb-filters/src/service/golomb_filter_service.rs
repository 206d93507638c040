//! Golomb Filter Service
//!
//! Walks blocks and mempool transactions, feeds their descriptors into a
//! `GolombFilter` and finalizes it.

use std::sync::Arc;
use std::time::Instant;

use shared_types::{Block, Tx};
use tracing::{debug, warn};

use crate::domain::{GolombFilter, GolombFilterConfig};
use crate::error::{DataError, FilterError};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{GolombFilterApi, SpentOutputProvider};

/// Golomb Filter Service implementation
///
/// Implements the `GolombFilterApi` port using injected dependencies.
/// Holds no per-block state; every call builds its own `GolombFilter`.
pub struct GolombFilterService<P: SpentOutputProvider, M: MetricsRecorder = NoOpMetrics> {
    /// Spent output lookup (driven port)
    outputs: Arc<P>,
    config: GolombFilterConfig,
    metrics: Arc<M>,
}

impl<P: SpentOutputProvider> GolombFilterService<P> {
    /// Create a new service, validating `config`
    pub fn new(outputs: Arc<P>, config: GolombFilterConfig) -> Result<Self, FilterError> {
        Self::with_metrics(outputs, config, Arc::new(NoOpMetrics))
    }
}

impl<P: SpentOutputProvider, M: MetricsRecorder> GolombFilterService<P, M> {
    /// Create with a custom metrics recorder
    pub fn with_metrics(
        outputs: Arc<P>,
        config: GolombFilterConfig,
        metrics: Arc<M>,
    ) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            outputs,
            config,
            metrics,
        })
    }

    pub fn config(&self) -> &GolombFilterConfig {
        &self.config
    }

    /// Finalize `filter` and record how it ended
    fn finish(&self, filter: &GolombFilter) -> Option<Vec<u8>> {
        let start = Instant::now();
        let outcome = filter.compute_outcome();
        self.metrics.record_compute(start.elapsed());
        self.metrics.record_outcome(&outcome, filter.len());
        outcome.into_bytes()
    }
}

impl<P, M> GolombFilterApi for GolombFilterService<P, M>
where
    P: SpentOutputProvider,
    M: MetricsRecorder,
{
    fn block_filter(&self, block: &Block) -> Result<Option<Vec<u8>>, FilterError> {
        let mut filter = GolombFilter::new(
            self.config.block_golomb_filter_p,
            &self.config.block_filter_scripts,
            block.header.hash.as_str(),
        )?;
        if !filter.is_enabled() {
            return Ok(None);
        }

        for tx in &block.txs {
            for vout in &tx.vout {
                filter.add_addr_desc(&vout.addr_desc(), Some(tx));
            }
            for vin in &tx.vin {
                if let Some(ad) = self.outputs.spent_addr_desc(vin)? {
                    filter.add_addr_desc(&ad, Some(tx));
                }
            }
        }

        debug!(
            height = block.header.height,
            hash = %block.header.hash,
            admitted = filter.len(),
            "Collected block filter descriptors"
        );
        Ok(self.finish(&filter))
    }

    fn mempool_filter(&self, tx: &Tx) -> Result<String, FilterError> {
        let mut filter = GolombFilter::new(
            self.config.mempool_golomb_filter_p,
            &self.config.block_filter_scripts,
            tx.txid.as_str(),
        )?;
        if !filter.is_enabled() {
            return Ok(String::new());
        }

        for vin in &tx.vin {
            match self.outputs.spent_addr_desc(vin) {
                Ok(Some(ad)) => filter.add_addr_desc(&ad, Some(tx)),
                Ok(None) => {}
                // Parent may not be indexed yet, the input is left out
                Err(DataError::OutputNotFound { txid, vout }) => {
                    warn!(txid = %tx.txid, spent = %txid, vout, "Spent output not found for mempool input");
                }
                Err(e) => return Err(e.into()),
            }
        }
        for vout in &tx.vout {
            filter.add_addr_desc(&vout.addr_desc(), Some(tx));
        }

        Ok(self.finish(&filter).map(hex::encode).unwrap_or_default())
    }
}

//! # Golomb Filter Accumulator
//!
//! Collects the address descriptors seen in one block (or one mempool
//! transaction) and encodes them into a GCS filter.
//!
//! ## Lifecycle
//!
//! 1. `GolombFilter::new(p, filter_scripts, key)` once per block
//! 2. `add_addr_desc` for every descriptor observed, with its owning tx
//! 3. `compute` once every descriptor has been offered
//!
//! Offering more descriptors after `compute` is not supported: the next
//! `compute` would encode a different set under the same key. Start a new
//! filter instead.
//!
//! ## Invariants
//!
//! - The admitted set holds no duplicates and no empty descriptors.
//! - `p == 0` disables the filter; every operation is then a no-op.

use std::collections::HashSet;

use shared_types::{AddressDescriptor, Tx};
use tracing::{debug, error, trace};

use super::filter_scripts::FilterScripts;
use super::gcs_filter::{GcsFilter, KEY_SIZE};
use super::ordinals::transaction_looks_like_ordinal;
use crate::error::FilterError;

/// Result of finalizing a filter.
///
/// Only `Built` carries bytes; every other variant means "no filter" for
/// the block. The split exists so hosts can tell steady states (disabled,
/// empty) apart from degraded ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Serialized filter: `CompactSize(N) || Golomb-Rice bit stream`
    Built(Vec<u8>),
    /// Filtering is turned off (`p == 0`)
    Disabled,
    /// Nothing was admitted
    Empty,
    /// Key is not hex or is shorter than the encoder key size
    InvalidKey,
    /// The encoder rejected the input or serialization failed
    EncoderFailed,
}

impl FilterOutcome {
    /// Filter bytes, if one was built.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            FilterOutcome::Built(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self, FilterOutcome::Built(_))
    }
}

/// Why a descriptor was not admitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    Disabled,
    NotTaproot,
    Ordinal,
    Empty,
    Duplicate,
}

/// Golomb filter over address descriptors.
#[derive(Clone, Debug)]
pub struct GolombFilter {
    enabled: bool,
    /// Golomb-Rice parameter, false positive rate is 2^-p
    p: u8,
    /// Hex encoded filter key (block hash or txid)
    key: String,
    filter_scripts: FilterScripts,
    /// Admitted descriptors in first-seen order
    filter_data: Vec<AddressDescriptor>,
    unique_data: HashSet<AddressDescriptor>,
}

impl GolombFilter {
    /// Create a filter.
    ///
    /// `p == 0` yields a disabled filter regardless of the other arguments.
    /// An unrecognized `filter_scripts` string is a configuration error.
    pub fn new(p: u8, filter_scripts: &str, key: impl Into<String>) -> Result<Self, FilterError> {
        if p == 0 {
            return Ok(Self::disabled());
        }

        match FilterScripts::parse(filter_scripts) {
            FilterScripts::Invalid => Err(FilterError::InvalidFilterScripts(
                filter_scripts.to_string(),
            )),
            scripts => Ok(Self::with_scripts(p, scripts, key)),
        }
    }

    /// Create a filter from an already resolved script policy.
    ///
    /// `FilterScripts::Invalid` is rejected like an unrecognized string.
    pub fn with_filter_scripts(
        p: u8,
        filter_scripts: FilterScripts,
        key: impl Into<String>,
    ) -> Result<Self, FilterError> {
        if p == 0 {
            return Ok(Self::disabled());
        }
        if !filter_scripts.is_valid() {
            return Err(FilterError::InvalidFilterScripts(filter_scripts.to_string()));
        }
        Ok(Self::with_scripts(p, filter_scripts, key))
    }

    /// A filter that ignores everything and never produces output.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            p: 0,
            key: String::new(),
            filter_scripts: FilterScripts::Invalid,
            filter_data: Vec::new(),
            unique_data: HashSet::new(),
        }
    }

    fn with_scripts(p: u8, filter_scripts: FilterScripts, key: impl Into<String>) -> Self {
        Self {
            enabled: true,
            p,
            key: key.into(),
            filter_scripts,
            filter_data: Vec::new(),
            unique_data: HashSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn p(&self) -> u8 {
        self.p
    }

    /// Modulus handed to the encoder: `2^p`.
    pub fn m(&self) -> u64 {
        1u64.checked_shl(u32::from(self.p)).unwrap_or(0)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn filter_scripts(&self) -> FilterScripts {
        self.filter_scripts
    }

    /// Admitted descriptors, in first-seen order.
    pub fn descriptors(&self) -> &[AddressDescriptor] {
        &self.filter_data
    }

    pub fn len(&self) -> usize {
        self.filter_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filter_data.is_empty()
    }

    /// Offer a descriptor observed in the block. `tx` is the transaction
    /// that owns it, if known.
    ///
    /// Discards are silent; see [`GolombFilter::try_add_addr_desc`] for the
    /// reason.
    pub fn add_addr_desc(&mut self, ad: &AddressDescriptor, tx: Option<&Tx>) {
        if let Err(reason) = self.try_add_addr_desc(ad, tx) {
            trace!(reason = ?reason, desc = %ad, "Descriptor not admitted");
        }
    }

    /// Offer a descriptor, reporting why it was not admitted.
    pub fn try_add_addr_desc(
        &mut self,
        ad: &AddressDescriptor,
        tx: Option<&Tx>,
    ) -> Result<(), Rejection> {
        if !self.enabled {
            return Err(Rejection::Disabled);
        }
        if self.filter_scripts.ignores_non_taproot() && !ad.is_taproot() {
            return Err(Rejection::NotTaproot);
        }
        if self.filter_scripts.ignores_ordinals() && tx.is_some_and(transaction_looks_like_ordinal) {
            return Err(Rejection::Ordinal);
        }
        if ad.is_empty() {
            return Err(Rejection::Empty);
        }
        if self.unique_data.contains(ad) {
            return Err(Rejection::Duplicate);
        }

        self.unique_data.insert(ad.clone());
        self.filter_data.push(ad.clone());
        Ok(())
    }

    /// Encode the admitted set. `None` means "no filter" for this block.
    pub fn compute(&self) -> Option<Vec<u8>> {
        self.compute_outcome().into_bytes()
    }

    /// Encode the admitted set, reporting why no filter was produced.
    pub fn compute_outcome(&self) -> FilterOutcome {
        if !self.enabled {
            return FilterOutcome::Disabled;
        }
        if self.filter_data.is_empty() {
            return FilterOutcome::Empty;
        }

        let Some(key) = self.decode_key() else {
            debug!(key = %self.key, "Golomb filter key is not usable, skipping filter");
            return FilterOutcome::InvalidKey;
        };

        let filter = match GcsFilter::build(self.p, self.m(), &key, &self.filter_data) {
            Ok(filter) => filter,
            Err(e) => {
                error!(key = %self.key, error = %e, "Cannot create golomb filter");
                return FilterOutcome::EncoderFailed;
            }
        };

        match filter.n_bytes() {
            Ok(bytes) => {
                debug!(
                    key = %self.key,
                    elements = filter.n(),
                    size = bytes.len(),
                    "Computed golomb filter"
                );
                FilterOutcome::Built(bytes)
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "Error getting NBytes from golomb filter");
                FilterOutcome::EncoderFailed
            }
        }
    }

    /// First `KEY_SIZE` bytes of the hex key.
    fn decode_key(&self) -> Option<[u8; KEY_SIZE]> {
        let bytes = hex::decode(&self.key).ok()?;
        let prefix = bytes.get(..KEY_SIZE)?;
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(prefix);
        Some(key)
    }
}

//! Golomb filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use golomb_filters::domain::GolombFilterConfigBuilder;
//!
//! let config = GolombFilterConfigBuilder::new()
//!     .block_golomb_filter_p(20)
//!     .block_filter_scripts("taproot-noordinals")
//!     .mempool_golomb_filter_p(8)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use super::filter_scripts::FilterScripts;
use super::gcs_filter::MAX_P;
use crate::error::FilterError;

/// Golomb filter configuration
///
/// Field names follow the chain configuration file. A `p` of 0 turns the
/// corresponding filter off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GolombFilterConfig {
    /// Golomb-Rice parameter for per-block filters (0 = disabled)
    pub block_golomb_filter_p: u8,
    /// Scripts admitted into per-block filters: `""`, `"taproot"` or
    /// `"taproot-noordinals"`
    pub block_filter_scripts: String,
    /// Golomb-Rice parameter for per-transaction mempool filters (0 = disabled)
    pub mempool_golomb_filter_p: u8,
}

impl GolombFilterConfig {
    /// Create a new configuration with validation
    pub fn new(
        block_golomb_filter_p: u8,
        block_filter_scripts: impl Into<String>,
        mempool_golomb_filter_p: u8,
    ) -> Result<Self, FilterError> {
        let config = Self {
            block_golomb_filter_p,
            block_filter_scripts: block_filter_scripts.into(),
            mempool_golomb_filter_p,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FilterError::InvalidParameter(format!("config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.block_golomb_filter_p > MAX_P {
            return Err(FilterError::InvalidParameter(format!(
                "block_golomb_filter_p {} exceeds {}",
                self.block_golomb_filter_p, MAX_P
            )));
        }

        if self.mempool_golomb_filter_p > MAX_P {
            return Err(FilterError::InvalidParameter(format!(
                "mempool_golomb_filter_p {} exceeds {}",
                self.mempool_golomb_filter_p, MAX_P
            )));
        }

        // Scripts apply to both filters, check them even when blocks are off
        self.filter_scripts()?;

        Ok(())
    }

    /// Resolved script policy
    pub fn filter_scripts(&self) -> Result<FilterScripts, FilterError> {
        self.block_filter_scripts.parse()
    }

    pub fn block_filters_enabled(&self) -> bool {
        self.block_golomb_filter_p > 0
    }

    pub fn mempool_filters_enabled(&self) -> bool {
        self.mempool_golomb_filter_p > 0
    }
}

/// Builder for GolombFilterConfig with validation
#[derive(Default)]
pub struct GolombFilterConfigBuilder {
    block_golomb_filter_p: Option<u8>,
    block_filter_scripts: Option<String>,
    mempool_golomb_filter_p: Option<u8>,
}

impl GolombFilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-block Golomb-Rice parameter
    pub fn block_golomb_filter_p(mut self, p: u8) -> Self {
        self.block_golomb_filter_p = Some(p);
        self
    }

    /// Set the admitted script categories
    pub fn block_filter_scripts(mut self, scripts: impl Into<String>) -> Self {
        self.block_filter_scripts = Some(scripts.into());
        self
    }

    /// Set the mempool Golomb-Rice parameter
    pub fn mempool_golomb_filter_p(mut self, p: u8) -> Self {
        self.mempool_golomb_filter_p = Some(p);
        self
    }

    /// Build the GolombFilterConfig, validating all parameters
    pub fn build(self) -> Result<GolombFilterConfig, FilterError> {
        let defaults = GolombFilterConfig::default();

        let config = GolombFilterConfig {
            block_golomb_filter_p: self
                .block_golomb_filter_p
                .unwrap_or(defaults.block_golomb_filter_p),
            block_filter_scripts: self
                .block_filter_scripts
                .unwrap_or(defaults.block_filter_scripts),
            mempool_golomb_filter_p: self
                .mempool_golomb_filter_p
                .unwrap_or(defaults.mempool_golomb_filter_p),
        };

        config.validate()?;
        Ok(config)
    }
}

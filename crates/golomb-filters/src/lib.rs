//! # Golomb Filters
//!
//! Per-block Golomb-Coded Set filters over address descriptors, so light
//! clients can test whether a block touches any of their scripts without
//! downloading it.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `GolombFilter`: Admission policy, dedup and finalization
//!   - `FilterScripts`: Which scripts a filter admits
//!   - `GcsFilter`: Golomb-Rice encoder, BIP 158 wire format
//!   - `GolombFilterConfig`: Configuration with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `GolombFilterApi`: Driving port (inbound API)
//!   - `SpentOutputProvider`: Driven port (spent output lookup)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `GolombFilterService`: Implements `GolombFilterApi`
//!
//! - **Adapters Layer** (`adapters/`): Port implementations
//!   - `InMemoryOutputIndex`: Spent outputs from registered transactions
//!
//! ## Filter Scripts
//!
//! | Config value           | Admits                                         |
//! |------------------------|------------------------------------------------|
//! | `""`                   | every script                                   |
//! | `"taproot"`            | taproot outputs                                |
//! | `"taproot-noordinals"` | taproot outputs of txs without an inscription  |
//!
//! ## Failure Model
//!
//! Only configuration errors surface. An empty input set, an unusable key or
//! an encoder failure all mean "no filter" for the block; the block itself
//! still gets processed.
//!
//! ## Usage Example
//!
//! ```ignore
//! use golomb_filters::GolombFilter;
//!
//! let mut filter = GolombFilter::new(20, "taproot", block_hash_hex)?;
//! for (desc, tx) in observed {
//!     filter.add_addr_desc(&desc, Some(&tx));
//! }
//! let encoded: Option<Vec<u8>> = filter.compute();
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::InMemoryOutputIndex;
pub use domain::{
    FilterOutcome, FilterScripts, GcsFilter, GolombFilter, GolombFilterConfig,
    GolombFilterConfigBuilder,
};
pub use error::{DataError, FilterError, GcsError};
pub use metrics::{FilterMetrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{GolombFilterApi, SpentOutputProvider};
pub use service::GolombFilterService;

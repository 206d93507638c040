//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Script category policy (`FilterScripts`)
//! - Ordinal inscription heuristic
//! - Golomb filter accumulator (dedup + finalize)
//! - GCS encoder (BIP 158 wire format)
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod config;
pub mod filter_scripts;
pub mod gcs_filter;
pub mod golomb_filter;
pub mod ordinals;

pub use config::{GolombFilterConfig, GolombFilterConfigBuilder};
pub use filter_scripts::FilterScripts;
pub use gcs_filter::{GcsFilter, KEY_SIZE, MAX_P};
pub use golomb_filter::{FilterOutcome, GolombFilter, Rejection};
pub use ordinals::{input_looks_like_ordinal, transaction_looks_like_ordinal, ORDINAL_ENVELOPE};

//! Adapters Layer (Driven Adapters)
//!
//! Implementations of driven ports.
//!
//! ## Adapters
//!
//! - `InMemoryOutputIndex` - Resolves spent outputs from registered transactions

pub mod output_index;

pub use output_index::InMemoryOutputIndex;

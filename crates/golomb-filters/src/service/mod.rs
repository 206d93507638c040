//! Service Layer
//!
//! Application services that drive the domain filter over blocks and
//! mempool transactions, using ports for external data.

pub mod golomb_filter_service;

pub use golomb_filter_service::GolombFilterService;

//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for block and mempool processing
//! - Driven Ports (outbound) - Lookups of spent outputs

pub mod inbound;
pub mod outbound;

pub use inbound::GolombFilterApi;
pub use outbound::SpentOutputProvider;

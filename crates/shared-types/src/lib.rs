//! # Shared Types Crate
//!
//! Chain entities shared between the filter subsystem and its hosts.
//!
//! ## Design Principles
//!
//! - **Read-only collaborators**: Parsing raw transactions happens upstream;
//!   these types only carry what the filter needs (witness stacks, output
//!   scripts, spent outpoints).
//! - **Byte-exact descriptors**: An `AddressDescriptor` compares by raw bytes.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

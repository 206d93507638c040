//! # Core Domain Entities
//!
//! The chain entities the filter subsystem consumes.
//!
//! ## Clusters
//!
//! - **Scripts**: `AddressDescriptor`
//! - **Transactions**: `Tx`, `Vin`, `Vout`
//! - **Blocks**: `Block`, `BlockHeader`
//!
//! Byte fields serialize as lowercase hex strings.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::EntityError;

// =============================================================================
// CLUSTER A: SCRIPTS
// =============================================================================

/// OP_1, the segwit version 1 witness program marker.
const OP_1: u8 = 0x51;

/// OP_PUSHBYTES_32, pushes a 32-byte x-only output key.
const OP_PUSHBYTES_32: u8 = 0x20;

/// Length of a taproot output script: version byte, push opcode, 32-byte key.
const TAPROOT_SCRIPT_LEN: usize = 34;

/// Canonical byte identifier of a spendable output script.
///
/// For bitcoin-type chains this is the raw `scriptPubKey`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressDescriptor(Vec<u8>);

impl AddressDescriptor {
    /// Wrap raw descriptor bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode a descriptor from hex.
    pub fn from_hex(s: &str) -> Result<Self, EntityError> {
        Ok(Self(hex::decode(s)?))
    }

    /// Raw descriptor bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for a segwit v1 (P2TR) output script: `OP_1 <32-byte key>`.
    pub fn is_taproot(&self) -> bool {
        self.0.len() == TAPROOT_SCRIPT_LEN && self.0[0] == OP_1 && self.0[1] == OP_PUSHBYTES_32
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for AddressDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressDescriptor({})", self.to_hex())
    }
}

impl fmt::Display for AddressDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Vec<u8>> for AddressDescriptor {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for AddressDescriptor {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for AddressDescriptor {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for AddressDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AddressDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// CLUSTER B: TRANSACTIONS
// =============================================================================

/// A transaction input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vin {
    /// Txid of the spent output, empty for coinbase inputs.
    #[serde(default)]
    pub txid: String,
    /// Index of the spent output within its transaction.
    #[serde(default)]
    pub vout: u32,
    /// Witness stack, bottom item first.
    #[serde(default, with = "hex_vec")]
    pub witness: Vec<Vec<u8>>,
}

impl Vin {
    /// Coinbase inputs spend nothing.
    pub fn is_coinbase(&self) -> bool {
        self.txid.is_empty()
    }
}

/// A transaction output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vout {
    /// Amount in satoshis.
    pub value: u64,
    /// Position within the transaction.
    pub n: u32,
    /// Locking script.
    #[serde(with = "hex_bytes")]
    pub script_pub_key: Vec<u8>,
}

impl Vout {
    /// Address descriptor of this output (the raw script).
    pub fn addr_desc(&self) -> AddressDescriptor {
        AddressDescriptor::from(self.script_pub_key.as_slice())
    }
}

/// A parsed transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    /// Transaction id, hex in display order.
    pub txid: String,
    #[serde(default)]
    pub vin: Vec<Vin>,
    #[serde(default)]
    pub vout: Vec<Vout>,
}

// =============================================================================
// CLUSTER C: BLOCKS
// =============================================================================

/// Header fields needed to key and index a block filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block hash, hex in display order.
    pub hash: String,
    pub height: u32,
}

/// A block and its transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<Tx>,
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

mod hex_vec {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(items: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded: Vec<String> = items.iter().map(hex::encode).collect();
        encoded.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        let encoded: Vec<String> = Vec::deserialize(deserializer)?;
        encoded
            .iter()
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

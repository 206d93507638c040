//! Ordinal inscription detection
//!
//! Inscriptions sit in a taproot script-path witness inside an envelope:
//!
//! ```text
//! OP_FALSE OP_IF OP_PUSHBYTES_3 "ord" OP_PUSHBYTES_1 <tag> ... OP_ENDIF
//! ```
//!
//! This is a byte scan for the envelope head, not a script parse. Scripts
//! that happen to contain the same run are flagged too.

use shared_types::{Tx, Vin};

/// Envelope head: `OP_0 OP_IF OP_PUSHBYTES_3 "ord" OP_PUSHBYTES_1`.
pub const ORDINAL_ENVELOPE: [u8; 7] = [
    0x00, // OP_0, OP_FALSE
    0x63, // OP_IF
    0x03, // OP_PUSHBYTES_3
    0x6f, // "o"
    0x72, // "r"
    0x64, // "d"
    0x01, // OP_PUSHBYTES_1
];

/// Witness item holding the tapscript in a `<sig> <script> <control>` spend.
const SCRIPT_WITNESS_INDEX: usize = 1;

/// True if the input's witness has more than two items and the second one
/// contains the envelope head.
pub fn input_looks_like_ordinal(vin: &Vin) -> bool {
    vin.witness.len() > 2 && contains(&vin.witness[SCRIPT_WITNESS_INDEX], &ORDINAL_ENVELOPE)
}

/// True if any input looks like an ordinal inscription.
pub fn transaction_looks_like_ordinal(tx: &Tx) -> bool {
    tx.vin.iter().any(input_looks_like_ordinal)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

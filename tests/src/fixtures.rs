//! # Test Fixtures
//!
//! Scripts, transactions and blocks shared by integration tests and
//! benchmarks.

use golomb_filters::domain::ORDINAL_ENVELOPE;
use rand::Rng;
use shared_types::{AddressDescriptor, Block, BlockHeader, Tx, Vin, Vout};
use tracing_subscriber::EnvFilter;

/// Hash of mainnet block 800000, display order.
pub const BLOCK_HASH: &str = "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054";

/// Txid of the transaction funding the fixture block's spend.
pub const PARENT_TXID: &str = "1111111111111111111111111111111111111111111111111111111111111111";

/// Txid of the spending transaction in the fixture block.
pub const SPEND_TXID: &str = "2222222222222222222222222222222222222222222222222222222222222222";

/// Install a test log subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `OP_1 <32-byte key>`
pub fn taproot_script(fill: u8) -> Vec<u8> {
    let mut script = vec![0x51, 0x20];
    script.extend_from_slice(&[fill; 32]);
    script
}

/// `OP_0 <20-byte key hash>`
pub fn p2wpkh_script(fill: u8) -> Vec<u8> {
    let mut script = vec![0x00, 0x14];
    script.extend_from_slice(&[fill; 20]);
    script
}

/// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
pub fn p2pkh_script(fill: u8) -> Vec<u8> {
    let mut script = vec![0x76, 0xa9, 0x14];
    script.extend_from_slice(&[fill; 20]);
    script.extend_from_slice(&[0x88, 0xac]);
    script
}

pub fn desc(script: Vec<u8>) -> AddressDescriptor {
    AddressDescriptor::new(script)
}

/// Script-path witness revealing a text inscription.
pub fn inscription_witness() -> Vec<Vec<u8>> {
    let mut tapscript = vec![0x20];
    tapscript.extend_from_slice(&[0x77; 32]);
    tapscript.push(0xac); // OP_CHECKSIG
    tapscript.extend_from_slice(&ORDINAL_ENVELOPE);
    tapscript.push(0x01); // content-type tag
    tapscript.push(0x0a);
    tapscript.extend_from_slice(b"text/plain");
    tapscript.push(0x00);
    tapscript.push(0x05);
    tapscript.extend_from_slice(b"hello");
    tapscript.push(0x68); // OP_ENDIF

    vec![vec![0x01; 64], tapscript, vec![0xc0; 33]]
}

/// Key-path spend witness: a single signature.
pub fn key_path_witness() -> Vec<Vec<u8>> {
    vec![vec![0x01; 64]]
}

fn vout(n: u32, script_pub_key: Vec<u8>) -> Vout {
    Vout {
        value: 10_000 + u64::from(n),
        n,
        script_pub_key,
    }
}

/// Transaction from an earlier block, paying to a P2PKH script.
pub fn parent_tx() -> Tx {
    Tx {
        txid: PARENT_TXID.to_string(),
        vin: vec![Vin::default()],
        vout: vec![vout(0, p2pkh_script(0xcc))],
    }
}

/// Block with a coinbase and one spend of `parent_tx`.
///
/// Descriptors seen, with the owning tx:
/// - coinbase: taproot `aa..`, p2wpkh `bb..`
/// - spend: taproot `dd..`, taproot `aa..` (again), spent p2pkh `cc..`
pub fn fixture_block(spend_witness: Vec<Vec<u8>>) -> Block {
    let coinbase = Tx {
        txid: "33".repeat(32),
        vin: vec![Vin::default()],
        vout: vec![vout(0, taproot_script(0xaa)), vout(1, p2wpkh_script(0xbb))],
    };
    let spend = spend_tx(spend_witness);

    Block {
        header: BlockHeader {
            hash: BLOCK_HASH.to_string(),
            height: 800_000,
        },
        txs: vec![coinbase, spend],
    }
}

/// The spending transaction of [`fixture_block`].
pub fn spend_tx(witness: Vec<Vec<u8>>) -> Tx {
    Tx {
        txid: SPEND_TXID.to_string(),
        vin: vec![Vin {
            txid: PARENT_TXID.to_string(),
            vout: 0,
            witness,
        }],
        vout: vec![vout(0, taproot_script(0xdd)), vout(1, taproot_script(0xaa))],
    }
}

/// Random block with `tx_count` transactions. Every transaction spends an
/// output of the previous one; roughly a third of the outputs are taproot.
pub fn random_block<R: Rng>(rng: &mut R, height: u32, tx_count: usize) -> Block {
    let mut hash = [0u8; 32];
    rng.fill(&mut hash);

    let mut txs: Vec<Tx> = Vec::with_capacity(tx_count);
    for i in 0..tx_count {
        let mut txid = [0u8; 32];
        rng.fill(&mut txid);

        let vin = match txs.last() {
            Some(prev) => Vin {
                txid: prev.txid.clone(),
                vout: 0,
                witness: key_path_witness(),
            },
            None => Vin::default(),
        };

        let outputs = rng.gen_range(1..4u32);
        let vout = (0..outputs)
            .map(|n| {
                let fill: u8 = rng.gen();
                let script = match (i as u32 + n) % 3 {
                    0 => taproot_script(fill),
                    1 => p2wpkh_script(fill),
                    _ => p2pkh_script(fill),
                };
                Vout {
                    value: rng.gen_range(546..100_000_000),
                    n,
                    script_pub_key: script,
                }
            })
            .collect();

        txs.push(Tx {
            txid: hex::encode(txid),
            vin: vec![vin],
            vout,
        });
    }

    Block {
        header: BlockHeader {
            hash: hex::encode(hash),
            height,
        },
        txs,
    }
}

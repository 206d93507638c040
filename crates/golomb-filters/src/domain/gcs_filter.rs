//! # GCS Filters (Golomb-Coded Sets)
//!
//! Compact probabilistic set encoding, wire compatible with the BIP 158
//! filter format.
//!
//! ## Algorithm
//!
//! 1. Hash every element with SipHash-2-4 under the 128-bit filter key
//! 2. Reduce each hash into `[0, N*M)` (multiply-high, no modulo bias)
//! 3. Sort and compute consecutive differences
//! 4. Golomb-Rice encode differences (unary quotient + `P`-bit remainder)
//!
//! ## Wire Format
//!
//! ```text
//! CompactSize(N) || bit stream (MSB first, zero padded to a byte)
//! ```
//!
//! The false positive rate of a filter is about `1 / M`.

use std::hash::Hasher;
use std::io::{self, Write};

use bitvec::prelude::*;
use siphasher::sip::SipHasher24;

use crate::error::GcsError;

/// Size of the SipHash key in bytes.
pub const KEY_SIZE: usize = 16;

/// Largest supported Golomb-Rice parameter.
pub const MAX_P: u8 = 32;

/// An encoded Golomb-Coded Set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcsFilter {
    /// Number of elements encoded
    n: u32,
    /// Golomb-Rice parameter (remainder bit width)
    p: u8,
    /// Modulus, false positive rate is about 1/m
    m: u64,
    /// Packed Golomb-Rice bit stream
    data: Vec<u8>,
}

impl GcsFilter {
    /// Build a filter over `data`, keyed by `key`.
    ///
    /// Duplicate elements are encoded as zero deltas; callers that want set
    /// semantics must deduplicate first.
    pub fn build<T: AsRef<[u8]>>(
        p: u8,
        m: u64,
        key: &[u8; KEY_SIZE],
        data: &[T],
    ) -> Result<Self, GcsError> {
        if data.len() as u64 >= 1 << 32 {
            return Err(GcsError::NTooBig);
        }
        if p > MAX_P {
            return Err(GcsError::PTooBig(p));
        }

        let n = data.len() as u32;
        let modulus_nm = u64::from(n).saturating_mul(m);
        let (k0, k1) = split_key(key);

        let mut values: Vec<u64> = data
            .iter()
            .map(|item| hash_to_range(item.as_ref(), k0, k1, modulus_nm))
            .collect();
        values.sort_unstable();

        let mut bits: BitVec<u8, Msb0> = BitVec::new();
        let mut last = 0u64;
        for value in values {
            golomb_encode(&mut bits, value - last, p);
            last = value;
        }

        // Pad explicitly so the backing bytes carry no dead bits
        let padded = bits.len().div_ceil(8) * 8;
        bits.resize(padded, false);

        Ok(Self {
            n,
            p,
            m,
            data: bits.into_vec(),
        })
    }

    /// Number of elements in the filter.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Golomb-Rice parameter.
    pub fn p(&self) -> u8 {
        self.p
    }

    /// Modulus the elements were reduced with (per element).
    pub fn m(&self) -> u64 {
        self.m
    }

    /// The packed bit stream without the element count.
    pub fn bit_stream(&self) -> &[u8] {
        &self.data
    }

    /// Serialize as `CompactSize(N) || bit stream`.
    pub fn n_bytes(&self) -> Result<Vec<u8>, GcsError> {
        let mut out = Vec::with_capacity(self.data.len() + 5);
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Write the serialized filter to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, GcsError> {
        let mut written = write_compact_size(writer, u64::from(self.n))?;
        writer.write_all(&self.data)?;
        written += self.data.len();
        Ok(written)
    }
}

fn split_key(key: &[u8; KEY_SIZE]) -> (u64, u64) {
    let mut k0 = [0u8; 8];
    let mut k1 = [0u8; 8];
    k0.copy_from_slice(&key[..8]);
    k1.copy_from_slice(&key[8..]);
    (u64::from_le_bytes(k0), u64::from_le_bytes(k1))
}

/// Hash data to `[0, max)` using SipHash-2-4 and multiply-high reduction.
fn hash_to_range(data: &[u8], k0: u64, k1: u64, max: u64) -> u64 {
    let mut hasher = SipHasher24::new_with_keys(k0, k1);
    hasher.write(data);
    let hash = hasher.finish();
    ((u128::from(hash) * u128::from(max)) >> 64) as u64
}

/// Append one Golomb-Rice coded value.
fn golomb_encode(bits: &mut BitVec<u8, Msb0>, delta: u64, p: u8) {
    let q = delta >> p;

    // Unary encode quotient: q ones followed by a zero
    for _ in 0..q {
        bits.push(true);
    }
    bits.push(false);

    // Binary encode remainder (P bits)
    for i in (0..p).rev() {
        bits.push((delta >> i) & 1 == 1);
    }
}

/// Bitcoin CompactSize varint.
pub fn write_compact_size<W: Write>(writer: &mut W, n: u64) -> io::Result<usize> {
    match n {
        0..=0xfc => {
            writer.write_all(&[n as u8])?;
            Ok(1)
        }
        0xfd..=0xffff => {
            writer.write_all(&[0xfd])?;
            writer.write_all(&(n as u16).to_le_bytes())?;
            Ok(3)
        }
        0x1_0000..=0xffff_ffff => {
            writer.write_all(&[0xfe])?;
            writer.write_all(&(n as u32).to_le_bytes())?;
            Ok(5)
        }
        _ => {
            writer.write_all(&[0xff])?;
            writer.write_all(&n.to_le_bytes())?;
            Ok(9)
        }
    }
}

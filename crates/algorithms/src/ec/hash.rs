//! Deterministic hashing of byte strings onto the order-`r` subgroup

use std::sync::Arc;

use sha2::{Digest, Sha256};

use super::{Curve, CurvePoint};
use crate::error::{Error, Result};
use crate::field::SqrtField;

/// Attempts before giving up on a curve that never yields a point
const MAX_ATTEMPTS: u32 = 1000;

/// Extra bytes drawn beyond the coordinate width to flatten the reduction bias
const EXTRA_BYTES: usize = 16;

/// SHA-256 in counter mode: `H(data || attempt || block)` for `block = 0, 1, …`
///
/// Also used by the element API to hash onto `Z_r` and GT.
pub fn expand_message(data: &[u8], attempt: u32, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len + 32);
    let mut block = 0u32;
    while out.len() < len {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.update(attempt.to_be_bytes());
        hasher.update(block.to_be_bytes());
        out.extend_from_slice(&hasher.finalize());
        block += 1;
    }
    out.truncate(len);
    out
}

impl<F: SqrtField> CurvePoint<F> {
    /// Map `data` to a non-identity point of the order-`r` subgroup
    ///
    /// Try-and-increment: each attempt derives a candidate `x` and a sign bit
    /// from the expanded hash, lifts it when `x³ + ax + b` is a square, then
    /// clears the cofactor. The same input always yields the same point.
    pub fn hash_to_curve(curve: &Arc<Curve<F>>, data: &[u8]) -> Result<Self> {
        let len = F::encoded_len(curve.field()) + EXTRA_BYTES + 1;
        for attempt in 0..MAX_ATTEMPTS {
            let bytes = expand_message(data, attempt, len);
            let sign = bytes[0] & 1 == 1;
            let x = F::from_uniform_bytes(curve.field(), &bytes[1..]);
            let Ok(p) = Self::from_x(curve, x, sign) else {
                continue;
            };
            let p = p.clear_cofactor();
            if !p.is_identity() {
                return Ok(p);
            }
        }
        Err(Error::param(
            "hash_to_curve",
            "no subgroup point found within the attempt limit",
        ))
    }
}

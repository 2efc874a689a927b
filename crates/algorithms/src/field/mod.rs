//! Prime fields and the extension towers built over them.
//!
//! Every element carries an `Arc` to the immutable descriptor of the field it
//! lives in, so arithmetic never needs a separate context argument and a
//! descriptor outlives every element created from it.
//!
//! Towers used by the pairing engines:
//!
//! - `Fp2 = Fp[u] / (u² − β)` with β a quadratic non-residue
//! - `Fp6 = Fp2[v] / (v³ − ξ)` with ξ neither a square nor a cube
//! - `Fp12 = Fp6[w] / (w² − v)`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use rand::{CryptoRng, RngCore};

use crate::bigint::BigInt;
use crate::error::Result;

/// Implement the by-value and by-reference operator traits in terms of the
/// `add_inner` / `sub_inner` / `mul_inner` / `neg_inner` methods of a type
macro_rules! impl_field_ops {
    ($t:ty) => {
        impl core::ops::Add for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: $t) -> $t {
                self.add_inner(&rhs)
            }
        }

        impl<'a> core::ops::Add<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &'a $t) -> $t {
                self.add_inner(rhs)
            }
        }

        impl<'a, 'b> core::ops::Add<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                self.add_inner(rhs)
            }
        }

        impl core::ops::Sub for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: $t) -> $t {
                self.sub_inner(&rhs)
            }
        }

        impl<'a> core::ops::Sub<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &'a $t) -> $t {
                self.sub_inner(rhs)
            }
        }

        impl<'a, 'b> core::ops::Sub<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                self.sub_inner(rhs)
            }
        }

        impl core::ops::Mul for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                self.mul_inner(&rhs)
            }
        }

        impl<'a> core::ops::Mul<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &'a $t) -> $t {
                self.mul_inner(rhs)
            }
        }

        impl<'a, 'b> core::ops::Mul<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                self.mul_inner(rhs)
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                self.neg_inner()
            }
        }

        impl<'a> core::ops::Neg for &'a $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                self.neg_inner()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;


pub use fp::{Fp, PrimeField};
pub use fp12::{Fp12, Fp12Field};
pub use fp2::{Fp2, Fp2Field};
pub use fp6::{Fp6, Fp6Field};

/// Capability set shared by every field in the tower.
///
/// The curve layer is written once against this trait and instantiated for
/// both the base field and the twist field.
pub trait FieldElement:
    Sized
    + Clone
    + fmt::Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + Sub<Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + Mul<Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + Neg<Output = Self>
{
    /// Descriptor of the field the element lives in
    type Field: fmt::Debug + Send + Sync;

    /// The descriptor shared by this element
    fn field(&self) -> &Arc<Self::Field>;

    /// Additive identity
    fn zero(field: &Arc<Self::Field>) -> Self;

    /// Multiplicative identity
    fn one(field: &Arc<Self::Field>) -> Self;

    /// Embed a small integer
    fn from_u64(field: &Arc<Self::Field>, v: u64) -> Self;

    /// True for the additive identity
    fn is_zero(&self) -> bool;

    /// True for the multiplicative identity
    fn is_one(&self) -> bool;

    /// `self * self`
    fn square(&self) -> Self;

    /// `self + self`
    fn double(&self) -> Self {
        self.clone() + self
    }

    /// Multiplicative inverse; fails with `NoInverse` only for zero
    fn invert(&self) -> Result<Self>;

    /// `self / rhs`; fails with `NoInverse` when `rhs` is zero
    fn div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.clone() * &rhs.invert()?)
    }

    /// `self^|exp|`
    ///
    /// The exponent is read as its magnitude. The loop is a Montgomery
    /// ladder, so every exponent bit costs one multiplication and one
    /// squaring regardless of its value.
    fn pow(&self, exp: &BigInt) -> Self {
        let mut r0 = Self::one(self.field());
        let mut r1 = self.clone();
        for i in (0..exp.bits()).rev() {
            if exp.bit(i) {
                r0 = r0 * &r1;
                r1 = r1.square();
            } else {
                r1 = r0.clone() * &r1;
                r0 = r0.square();
            }
        }
        r0
    }

    /// Width in bytes of the canonical encoding
    fn encoded_len(field: &Arc<Self::Field>) -> usize;

    /// Canonical fixed-width big-endian encoding
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a canonical encoding, rejecting out-of-range coefficients
    fn from_bytes(field: &Arc<Self::Field>, bytes: &[u8]) -> Result<Self>;

    /// Map arbitrary bytes onto the field by reducing big-endian chunks
    fn from_uniform_bytes(field: &Arc<Self::Field>, bytes: &[u8]) -> Self;

    /// Uniformly random element
    fn random<R: RngCore + CryptoRng>(field: &Arc<Self::Field>, rng: &mut R) -> Self {
        let mut buf = vec![0u8; Self::encoded_len(field) + 16];
        rng.fill_bytes(&mut buf);
        Self::from_uniform_bytes(field, &buf)
    }
}

/// Fields with a square root algorithm, used by point decompression
pub trait SqrtField: FieldElement {
    /// A square root; fails with `NotASquare` for non-residues
    fn sqrt(&self) -> Result<Self>;

    /// True when the first nonzero base coefficient exceeds `(p − 1) / 2`
    ///
    /// Exactly one of `x` and `−x` is signed for `x ≠ 0`.
    fn sign(&self) -> bool;

    /// True when a square root exists
    fn is_square(&self) -> bool {
        self.sqrt().is_ok()
    }
}

/// Split `bytes` into `n` nearly equal contiguous chunks
pub(crate) fn split_uniform(bytes: &[u8], n: usize) -> Vec<&[u8]> {
    let step = bytes.len() / n;
    (0..n)
        .map(|i| {
            let start = i * step;
            let end = if i + 1 == n { bytes.len() } else { start + step };
            &bytes[start..end]
        })
        .collect()
}

//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] is a sign-magnitude integer over little-endian `u64` limbs. The
//! representation is always canonical: the limb vector has no high zero
//! limbs, and zero is never negative, so derived equality and hashing agree
//! with numeric equality.
//!
//! Arithmetic is value-semantic. Every operator borrows or consumes its
//! operands and returns a fresh integer.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Shl, Shr, Sub};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{Error, Result};

mod convert;
pub(crate) mod limbs;
mod modular;

#[cfg(test)]
mod tests;

pub use modular::MILLER_RABIN_ROUNDS;

/// Arbitrary-precision signed integer
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct BigInt {
    negative: bool,
    limbs: Vec<u64>,
}

impl BigInt {
    /// The integer 0
    pub fn zero() -> Self {
        Self::default()
    }

    /// The integer 1
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Build from a non-negative machine word
    pub fn from_u64(v: u64) -> Self {
        Self::from_limbs(false, vec![v])
    }

    /// Build from a signed machine word
    pub fn from_i64(v: i64) -> Self {
        Self::from_limbs(v < 0, vec![v.unsigned_abs()])
    }

    /// Build from a sign and magnitude, normalizing both
    pub(crate) fn from_limbs(negative: bool, mut limbs: Vec<u64>) -> Self {
        limbs::normalize(&mut limbs);
        let negative = negative && !limbs.is_empty();
        Self { negative, limbs }
    }

    /// Little-endian magnitude limbs
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// True for 0
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// True for 1
    pub fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// True for values below zero
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for values above zero
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.limbs.is_empty()
    }

    /// True when the magnitude is odd
    pub fn is_odd(&self) -> bool {
        self.limbs.first().map_or(false, |l| l & 1 == 1)
    }

    /// True when the magnitude is even
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Number of significant bits in the magnitude (0 for zero)
    pub fn bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => self.limbs.len() * 64 - top.leading_zeros() as usize,
        }
    }

    /// Bit `i` of the magnitude
    pub fn bit(&self, i: usize) -> bool {
        let limb = i / 64;
        limb < self.limbs.len() && (self.limbs[limb] >> (i % 64)) & 1 == 1
    }

    /// Number of trailing zero bits of the magnitude, `None` for zero
    pub fn trailing_zeros(&self) -> Option<usize> {
        self.limbs
            .iter()
            .enumerate()
            .find(|&(_, &l)| l != 0)
            .map(|(i, l)| i * 64 + l.trailing_zeros() as usize)
    }

    /// The value as a `u64`, if it is non-negative and fits
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        match self.limbs.len() {
            0 => Some(0),
            1 => Some(self.limbs[0]),
            _ => None,
        }
    }

    /// `self` raised to a small power
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Truncating division: `self = q * d + r` with `|r| < |d|` and `r`
    /// carrying the sign of `self`
    pub fn div_rem(&self, d: &BigInt) -> Result<(BigInt, BigInt)> {
        if d.is_zero() {
            return Err(Error::param("divisor", "division by zero"));
        }
        Ok(self.div_rem_nonzero(d))
    }

    pub(crate) fn div_rem_nonzero(&self, d: &BigInt) -> (BigInt, BigInt) {
        let (q, r) = limbs::div_rem(&self.limbs, &d.limbs);
        (
            Self::from_limbs(self.negative != d.negative, q),
            Self::from_limbs(self.negative, r),
        )
    }

    fn add_signed(a_neg: bool, a: &[u64], b_neg: bool, b: &[u64]) -> BigInt {
        if a_neg == b_neg {
            return Self::from_limbs(a_neg, limbs::add(a, b));
        }
        match limbs::cmp(a, b) {
            Ordering::Less => Self::from_limbs(b_neg, limbs::sub(b, a)),
            _ => Self::from_limbs(a_neg, limbs::sub(a, b)),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &'b BigInt) -> BigInt {
        BigInt::add_signed(self.negative, &self.limbs, rhs.negative, &rhs.limbs)
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &'b BigInt) -> BigInt {
        BigInt::add_signed(self.negative, &self.limbs, !rhs.negative, &rhs.limbs)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &'b BigInt) -> BigInt {
        BigInt::from_limbs(
            self.negative != rhs.negative,
            limbs::mul(&self.limbs, &rhs.limbs),
        )
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl<'b> $imp<&'b BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &'b BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_limbs(!self.negative, self.limbs.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_limbs(!self.negative, self.limbs)
    }
}

/// Shifts act on the magnitude and keep the sign.
impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        BigInt::from_limbs(self.negative, limbs::shl(&self.limbs, n))
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        (&self).shl(n)
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> BigInt {
        BigInt::from_limbs(self.negative, limbs::shr(&self.limbs, n))
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> BigInt {
        (&self).shr(n)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => limbs::cmp(&self.limbs, &other.limbs),
            (true, true) => limbs::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        let n = self.limbs.len().max(other.limbs.len());
        let mut acc = (self.negative as u8).ct_eq(&(other.negative as u8));
        for i in 0..n {
            let a = self.limbs.get(i).copied().unwrap_or(0);
            let b = other.limbs.get(i).copied().unwrap_or(0);
            acc &= a.ct_eq(&b);
        }
        acc
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

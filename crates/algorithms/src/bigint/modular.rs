//! Modular arithmetic and number-theoretic helpers

use subtle::{Choice, ConditionallySelectable};

use super::{limbs, BigInt};
use crate::error::{Error, Result};

/// Miller-Rabin witnesses used by the parameter loader
pub const MILLER_RABIN_ROUNDS: usize = 32;

/// The first primes, used for trial division and as deterministic witnesses
const SMALL_PRIMES: [u64; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

impl BigInt {
    /// Euclidean reduction into `[0, m)`
    pub fn modulo(&self, m: &BigInt) -> Result<BigInt> {
        if !m.is_positive() {
            return Err(Error::param("modulus", "must be positive"));
        }
        Ok(self.rem_euclid_positive(m))
    }

    /// Euclidean reduction for a modulus already known to be positive
    pub(crate) fn rem_euclid_positive(&self, m: &BigInt) -> BigInt {
        debug_assert!(m.is_positive());
        let (_, r) = limbs::div_rem(&self.limbs, &m.limbs);
        let r = BigInt::from_limbs(false, r);
        if self.negative && !r.is_zero() {
            m.abs() - r
        } else {
            r
        }
    }

    /// Inverse modulo `m` via the extended Euclidean algorithm
    ///
    /// Fails with `NoInverse` when `gcd(self, m) != 1` or `m <= 1`.
    pub fn mod_inverse(&self, m: &BigInt) -> Result<BigInt> {
        if m <= &BigInt::one() {
            return Err(Error::NoInverse {
                context: "BigInt::mod_inverse",
            });
        }
        let a = self.rem_euclid_positive(m);
        let (mut old_r, mut r) = (a, m.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
        while !r.is_zero() {
            let (q, rem) = old_r.div_rem_nonzero(&r);
            old_r = core::mem::replace(&mut r, rem);
            let next = &old_s - &(&q * &s);
            old_s = core::mem::replace(&mut s, next);
        }
        if !old_r.is_one() {
            return Err(Error::NoInverse {
                context: "BigInt::mod_inverse",
            });
        }
        Ok(old_s.rem_euclid_positive(m))
    }

    /// `self^exp mod m`
    ///
    /// Negative exponents raise the modular inverse. The exponentiation is a
    /// Montgomery ladder: every exponent bit costs one multiplication and one
    /// squaring, and the operands are swapped with `subtle` rather than
    /// branched on.
    pub fn mod_pow(&self, exp: &BigInt, m: &BigInt) -> Result<BigInt> {
        if !m.is_positive() {
            return Err(Error::param("modulus", "must be positive"));
        }
        if m.is_one() {
            return Ok(BigInt::zero());
        }
        let base = if exp.is_negative() {
            self.mod_inverse(m)?
        } else {
            self.rem_euclid_positive(m)
        };
        Ok(base.pow_mod_ladder(exp, m))
    }

    /// Ladder over the magnitude of `exp`; `self` must be reduced and `m > 1`
    pub(crate) fn pow_mod_ladder(&self, exp: &BigInt, m: &BigInt) -> BigInt {
        let n = m.limbs.len();
        let mut r0 = padded(&[1], n);
        let mut r1 = padded(&self.limbs, n);
        for i in (0..exp.bits()).rev() {
            let choice = Choice::from(exp.bit(i) as u8);
            conditional_swap(&mut r0, &mut r1, choice);
            r1 = padded(&mul_mod(&r0, &r1, &m.limbs), n);
            r0 = padded(&mul_mod(&r0, &r0, &m.limbs), n);
            conditional_swap(&mut r0, &mut r1, choice);
        }
        BigInt::from_limbs(false, r0)
    }

    /// Greatest common divisor of the magnitudes
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let (mut a, mut b) = (self.abs(), other.abs());
        while !b.is_zero() {
            let (_, r) = a.div_rem_nonzero(&b);
            a = core::mem::replace(&mut b, r);
        }
        a
    }

    /// Floor of the square root
    pub fn isqrt(&self) -> Result<BigInt> {
        if self.is_negative() {
            return Err(Error::param("isqrt", "negative operand"));
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        // Newton iteration from a power of two above the root
        let mut x = BigInt::one() << ((self.bits() + 1) / 2);
        loop {
            let (q, _) = self.div_rem_nonzero(&x);
            let y = (&x + &q) >> 1;
            if y >= x {
                return Ok(x);
            }
            x = y;
        }
    }

    /// Miller-Rabin with the first `rounds` primes as witnesses
    ///
    /// Witnesses are fixed so the answer is deterministic; `rounds` is
    /// capped at the size of the witness table.
    pub fn is_probable_prime(&self, rounds: usize) -> bool {
        let two = BigInt::from_u64(2);
        if self < &two {
            return false;
        }
        for &p in SMALL_PRIMES.iter() {
            let p = BigInt::from_u64(p);
            if self == &p {
                return true;
            }
            if self.rem_euclid_positive(&p).is_zero() {
                return false;
            }
        }
        let largest = BigInt::from_u64(SMALL_PRIMES[SMALL_PRIMES.len() - 1]);
        if self < &(&largest * &largest) {
            return true;
        }

        let n_minus_one = self - &BigInt::one();
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> s;

        'witness: for &a in SMALL_PRIMES.iter().take(rounds.max(1)) {
            let mut x = BigInt::from_u64(a).pow_mod_ladder(&d, self);
            if x.is_one() || x == n_minus_one {
                continue;
            }
            for _ in 1..s {
                x = (&x * &x).rem_euclid_positive(self);
                if x == n_minus_one {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }
}

fn mul_mod(a: &[u64], b: &[u64], m: &[u64]) -> Vec<u64> {
    limbs::div_rem(&limbs::mul(a, b), m).1
}

fn padded(a: &[u64], n: usize) -> Vec<u64> {
    let mut out = a.to_vec();
    out.resize(n.max(a.len()), 0);
    out
}

fn conditional_swap(a: &mut [u64], b: &mut [u64], choice: Choice) {
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        u64::conditional_swap(x, y, choice);
    }
}

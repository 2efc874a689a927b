//! Prime field `GF(p)` for an arbitrary odd prime `p`

use core::fmt;
use std::sync::Arc;

use subtle::{Choice, ConstantTimeEq};

use super::{FieldElement, SqrtField};
use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};

/// Upper bound on candidates tried when searching for a non-residue
const NON_RESIDUE_SEARCH: u64 = 10_000;

/// How square roots are taken in a given field
#[derive(Debug)]
enum SqrtStrategy {
    /// `p ≡ 3 mod 4`: `sqrt(a) = a^((p+1)/4)`
    ThreeModFour { exp: BigInt },
    /// Tonelli-Shanks with `p − 1 = q · 2^s`, `z` a non-residue
    TonelliShanks { s: usize, q: BigInt, z: BigInt },
}

/// Descriptor of `GF(p)`: the modulus and its precomputed constants
#[derive(Debug)]
pub struct PrimeField {
    modulus: BigInt,
    byte_len: usize,
    half: BigInt,
    sqrt: SqrtStrategy,
}

impl PrimeField {
    /// Build the descriptor for an odd modulus `p > 2`
    ///
    /// Primality is not checked here; the parameter loader does that once.
    pub fn new(modulus: BigInt) -> Result<Arc<Self>> {
        validate::parameter(
            modulus > BigInt::from_u64(2),
            "modulus",
            "must be greater than 2",
        )?;
        validate::parameter(modulus.is_odd(), "modulus", "must be odd")?;

        let one = BigInt::one();
        let p_minus_one = &modulus - &one;
        let half = &p_minus_one >> 1;
        let byte_len = (modulus.bits() + 7) / 8;

        let sqrt = if modulus.limbs()[0] & 3 == 3 {
            SqrtStrategy::ThreeModFour {
                exp: (&modulus + &one) >> 2,
            }
        } else {
            let s = p_minus_one.trailing_zeros().unwrap_or(0);
            let q = &p_minus_one >> s;
            let z = find_non_residue(&modulus, &half)?;
            SqrtStrategy::TonelliShanks {
                s,
                z: z.pow_mod_ladder(&q, &modulus),
                q,
            }
        };

        Ok(Arc::new(Self {
            modulus,
            byte_len,
            half,
            sqrt,
        }))
    }

    /// The prime modulus
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Byte width of one encoded element
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// `p mod m` for a small `m`
    pub fn modulus_mod(&self, m: u64) -> u64 {
        self.modulus
            .rem_euclid_positive(&BigInt::from_u64(m))
            .to_u64()
            .unwrap_or(0)
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Eq for PrimeField {}

fn find_non_residue(p: &BigInt, half: &BigInt) -> Result<BigInt> {
    let p_minus_one = p - &BigInt::one();
    for c in 2..NON_RESIDUE_SEARCH {
        let z = BigInt::from_u64(c);
        if z.pow_mod_ladder(half, p) == p_minus_one {
            return Ok(z);
        }
    }
    Err(Error::param("modulus", "no quadratic non-residue found"))
}

/// Element of `GF(p)`, always held in `[0, p)`
#[derive(Clone)]
pub struct Fp {
    field: Arc<PrimeField>,
    value: BigInt,
}

impl Fp {
    /// Reduce an arbitrary integer into the field
    pub fn new(field: &Arc<PrimeField>, value: &BigInt) -> Self {
        Self {
            field: Arc::clone(field),
            value: value.rem_euclid_positive(&field.modulus),
        }
    }

    /// Wrap a value already known to lie in `[0, p)`
    fn from_reduced(field: &Arc<PrimeField>, value: BigInt) -> Self {
        debug_assert!(!value.is_negative() && value < field.modulus);
        Self {
            field: Arc::clone(field),
            value,
        }
    }

    /// Embed a signed machine word
    pub fn from_i64(field: &Arc<PrimeField>, v: i64) -> Self {
        Self::new(field, &BigInt::from_i64(v))
    }

    /// The canonical representative
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The canonical representative as an owned integer
    pub fn to_bigint(&self) -> BigInt {
        self.value.clone()
    }

    /// Euler's criterion: true for nonzero squares
    pub fn is_quadratic_residue(&self) -> bool {
        !self.is_zero() && self.value.pow_mod_ladder(&self.field.half, &self.field.modulus).is_one()
    }

    pub(crate) fn add_inner(&self, rhs: &Self) -> Self {
        debug_assert!(self.field == rhs.field);
        let sum = &self.value + &rhs.value;
        let value = if sum >= self.field.modulus {
            sum - &self.field.modulus
        } else {
            sum
        };
        Self::from_reduced(&self.field, value)
    }

    pub(crate) fn sub_inner(&self, rhs: &Self) -> Self {
        debug_assert!(self.field == rhs.field);
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            &(&self.value + &self.field.modulus) - &rhs.value
        };
        Self::from_reduced(&self.field, value)
    }

    pub(crate) fn mul_inner(&self, rhs: &Self) -> Self {
        debug_assert!(self.field == rhs.field);
        let product = &self.value * &rhs.value;
        Self::from_reduced(&self.field, product.rem_euclid_positive(&self.field.modulus))
    }

    pub(crate) fn neg_inner(&self) -> Self {
        if self.value.is_zero() {
            return self.clone();
        }
        Self::from_reduced(&self.field, &self.field.modulus - &self.value)
    }

    /// Tonelli-Shanks for `p ≡ 1 mod 4`
    fn tonelli_shanks(&self, s: usize, q: &BigInt, z: &BigInt) -> Result<Self> {
        let p = &self.field.modulus;
        let mut m = s;
        let mut c = Fp::from_reduced(&self.field, z.clone());
        let mut t = self.pow(q);
        let mut r = self.pow(&((q + &BigInt::one()) >> 1));
        while !t.is_one() {
            // least i with t^(2^i) = 1
            let mut i = 0;
            let mut t2 = t.clone();
            while !t2.is_one() {
                t2 = t2.square();
                i += 1;
                if i == m {
                    return Err(Error::NotASquare { context: "Fp::sqrt" });
                }
            }
            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = t * &c;
            r = r * &b;
        }
        debug_assert!(&r.value < p);
        Ok(r)
    }
}

impl_field_ops!(Fp);

impl FieldElement for Fp {
    type Field = PrimeField;

    fn field(&self) -> &Arc<PrimeField> {
        &self.field
    }

    fn zero(field: &Arc<PrimeField>) -> Self {
        Self::from_reduced(field, BigInt::zero())
    }

    fn one(field: &Arc<PrimeField>) -> Self {
        Self::from_reduced(field, BigInt::one())
    }

    fn from_u64(field: &Arc<PrimeField>, v: u64) -> Self {
        Self::new(field, &BigInt::from_u64(v))
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn square(&self) -> Self {
        self.mul_inner(self)
    }

    fn double(&self) -> Self {
        self.add_inner(self)
    }

    fn invert(&self) -> Result<Self> {
        let inv = self
            .value
            .mod_inverse(&self.field.modulus)
            .map_err(|_| Error::NoInverse {
                context: "Fp::invert",
            })?;
        Ok(Self::from_reduced(&self.field, inv))
    }

    fn pow(&self, exp: &BigInt) -> Self {
        Self::from_reduced(
            &self.field,
            self.value.pow_mod_ladder(exp, &self.field.modulus),
        )
    }

    fn encoded_len(field: &Arc<PrimeField>) -> usize {
        field.byte_len
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.field.byte_len];
        let raw = self.value.to_bytes_be();
        let offset = out.len() - raw.len();
        out[offset..].copy_from_slice(&raw);
        out
    }

    fn from_bytes(field: &Arc<PrimeField>, bytes: &[u8]) -> Result<Self> {
        validate::length("Fp::from_bytes", bytes.len(), field.byte_len)?;
        let value = BigInt::from_bytes_be(bytes);
        if value >= field.modulus {
            return Err(Error::encoding(
                "Fp::from_bytes",
                "value is not below the modulus",
            ));
        }
        Ok(Self::from_reduced(field, value))
    }

    fn from_uniform_bytes(field: &Arc<PrimeField>, bytes: &[u8]) -> Self {
        Self::new(field, &BigInt::from_bytes_be(bytes))
    }
}

impl SqrtField for Fp {
    fn sqrt(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        if !self.is_quadratic_residue() {
            return Err(Error::NotASquare { context: "Fp::sqrt" });
        }
        match &self.field.sqrt {
            SqrtStrategy::ThreeModFour { exp } => Ok(self.pow(exp)),
            SqrtStrategy::TonelliShanks { s, q, z } => self.tonelli_shanks(*s, q, z),
        }
    }

    fn sign(&self) -> bool {
        self.value > self.field.half
    }

    fn is_square(&self) -> bool {
        self.is_zero() || self.is_quadratic_residue()
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field.modulus == other.field.modulus
    }
}

impl Eq for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value)
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

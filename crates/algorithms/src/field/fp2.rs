//! Quadratic extension `Fp2 = Fp[u] / (u² − β)`

use core::fmt;
use std::sync::Arc;

use super::{split_uniform, FieldElement, Fp, PrimeField, SqrtField};
use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};

/// Descriptor of `Fp2`: the base field and the non-residue β
#[derive(Debug)]
pub struct Fp2Field {
    base: Arc<PrimeField>,
    beta: Fp,
}

impl Fp2Field {
    /// Build `Fp[u] / (u² − β)`; β must be a quadratic non-residue
    pub fn new(base: &Arc<PrimeField>, beta: &BigInt) -> Result<Arc<Self>> {
        let beta = Fp::new(base, beta);
        validate::parameter(
            !beta.is_zero() && !beta.is_quadratic_residue(),
            "beta",
            "must be a quadratic non-residue",
        )?;
        Ok(Arc::new(Self {
            base: Arc::clone(base),
            beta,
        }))
    }

    /// The base prime field
    pub fn base(&self) -> &Arc<PrimeField> {
        &self.base
    }

    /// The non-residue β with `u² = β`
    pub fn beta(&self) -> &Fp {
        &self.beta
    }
}

impl PartialEq for Fp2Field {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.beta == other.beta
    }
}

impl Eq for Fp2Field {}

/// Element `c0 + c1·u` of `Fp2`
#[derive(Clone)]
pub struct Fp2 {
    field: Arc<Fp2Field>,
    c0: Fp,
    c1: Fp,
}

impl Fp2 {
    /// Build from coefficients
    pub fn new(field: &Arc<Fp2Field>, c0: Fp, c1: Fp) -> Self {
        debug_assert!(c0.field() == field.base() && c1.field() == field.base());
        Self {
            field: Arc::clone(field),
            c0,
            c1,
        }
    }

    /// Build from integer coefficients, reducing each mod p
    pub fn from_bigints(field: &Arc<Fp2Field>, c0: &BigInt, c1: &BigInt) -> Self {
        Self::new(field, Fp::new(&field.base, c0), Fp::new(&field.base, c1))
    }

    /// Embed a base field element
    pub fn from_base(field: &Arc<Fp2Field>, c0: Fp) -> Self {
        let c1 = Fp::zero(&field.base);
        Self::new(field, c0, c1)
    }

    /// Constant coefficient
    pub fn c0(&self) -> &Fp {
        &self.c0
    }

    /// Coefficient of `u`
    pub fn c1(&self) -> &Fp {
        &self.c1
    }

    /// `c0 − c1·u`, which is also the `p`-power Frobenius
    pub fn conjugate(&self) -> Self {
        Self::new(&self.field, self.c0.clone(), -&self.c1)
    }

    /// `c0² − β·c1²`
    pub fn norm(&self) -> Fp {
        self.c0.square() - &(&self.field.beta * &self.c1.square())
    }

    /// Multiply by a base field element
    pub fn mul_by_base(&self, k: &Fp) -> Self {
        Self::new(&self.field, &self.c0 * k, &self.c1 * k)
    }

    pub(crate) fn add_inner(&self, rhs: &Self) -> Self {
        Self::new(&self.field, &self.c0 + &rhs.c0, &self.c1 + &rhs.c1)
    }

    pub(crate) fn sub_inner(&self, rhs: &Self) -> Self {
        Self::new(&self.field, &self.c0 - &rhs.c0, &self.c1 - &rhs.c1)
    }

    /// Karatsuba: `v0 + β·v1 + ((a0 + a1)(b0 + b1) − v0 − v1)·u`
    pub(crate) fn mul_inner(&self, rhs: &Self) -> Self {
        let v0 = &self.c0 * &rhs.c0;
        let v1 = &self.c1 * &rhs.c1;
        let cross = (&self.c0 + &self.c1) * (&rhs.c0 + &rhs.c1);
        let c0 = &v0 + &(&self.field.beta * &v1);
        let c1 = cross - &v0 - &v1;
        Self::new(&self.field, c0, c1)
    }

    pub(crate) fn neg_inner(&self) -> Self {
        Self::new(&self.field, -&self.c0, -&self.c1)
    }
}

impl_field_ops!(Fp2);

impl FieldElement for Fp2 {
    type Field = Fp2Field;

    fn field(&self) -> &Arc<Fp2Field> {
        &self.field
    }

    fn zero(field: &Arc<Fp2Field>) -> Self {
        Self::new(field, Fp::zero(&field.base), Fp::zero(&field.base))
    }

    fn one(field: &Arc<Fp2Field>) -> Self {
        Self::new(field, Fp::one(&field.base), Fp::zero(&field.base))
    }

    fn from_u64(field: &Arc<Fp2Field>, v: u64) -> Self {
        Self::from_base(field, Fp::from_u64(&field.base, v))
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    fn square(&self) -> Self {
        self.mul_inner(self)
    }

    /// `(c0 − c1·u) / (c0² − β·c1²)`
    fn invert(&self) -> Result<Self> {
        let inv = self.norm().invert().map_err(|_| Error::NoInverse {
            context: "Fp2::invert",
        })?;
        Ok(Self::new(&self.field, &self.c0 * &inv, -(&self.c1 * &inv)))
    }

    fn encoded_len(field: &Arc<Fp2Field>) -> usize {
        2 * field.base.byte_len()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c0.to_bytes();
        out.extend_from_slice(&self.c1.to_bytes());
        out
    }

    fn from_bytes(field: &Arc<Fp2Field>, bytes: &[u8]) -> Result<Self> {
        validate::length("Fp2::from_bytes", bytes.len(), Self::encoded_len(field))?;
        let (lo, hi) = bytes.split_at(field.base.byte_len());
        Ok(Self::new(
            field,
            Fp::from_bytes(&field.base, lo)?,
            Fp::from_bytes(&field.base, hi)?,
        ))
    }

    fn from_uniform_bytes(field: &Arc<Fp2Field>, bytes: &[u8]) -> Self {
        let parts = split_uniform(bytes, 2);
        Self::new(
            field,
            Fp::from_uniform_bytes(&field.base, parts[0]),
            Fp::from_uniform_bytes(&field.base, parts[1]),
        )
    }
}

impl SqrtField for Fp2 {
    /// Norm-based square root.
    ///
    /// For `a = a0 + a1·u` with `a1 ≠ 0`, a root `x0 + x1·u` satisfies
    /// `x0² = (a0 ± sqrt(N(a))) / 2` and `x1 = a1 / (2·x0)`.
    fn sqrt(&self) -> Result<Self> {
        let not_square = Error::NotASquare {
            context: "Fp2::sqrt",
        };
        let base = &self.field.base;

        if self.c1.is_zero() {
            // a0 is a square in Fp, or a0/β is
            if let Ok(s) = self.c0.sqrt() {
                return Ok(Self::from_base(&self.field, s));
            }
            let t = self.c0.div(&self.field.beta)?;
            let s = t.sqrt().map_err(|_| not_square.clone())?;
            return Ok(Self::new(&self.field, Fp::zero(base), s));
        }

        let alpha = self.norm().sqrt().map_err(|_| not_square.clone())?;
        let two_inv = Fp::from_u64(base, 2).invert()?;
        let delta = (&self.c0 + &alpha) * &two_inv;
        let x0 = match delta.sqrt() {
            Ok(x0) => x0,
            Err(_) => {
                let delta = (&self.c0 - &alpha) * &two_inv;
                delta.sqrt().map_err(|_| not_square.clone())?
            }
        };
        let x1 = self.c1.div(&x0.double())?;
        let root = Self::new(&self.field, x0, x1);
        if &root.square() != self {
            return Err(not_square);
        }
        Ok(root)
    }

    fn sign(&self) -> bool {
        if self.c0.is_zero() {
            self.c1.sign()
        } else {
            self.c0.sign()
        }
    }
}

impl PartialEq for Fp2 {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl Eq for Fp2 {}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

//! Quadratic extension `Fp12 = Fp6[w] / (w² − v)`, the BN target field.
//!
//! Viewed over `Fp2`, an element is `Σ aᵢ·wⁱ` for `i < 6` with `w⁶ = ξ`. The
//! even powers land in `c0 = (a0, a2, a4)` and the odd ones in
//! `c1 = (a1, a3, a5)`.

use core::fmt;
use std::sync::Arc;

use super::{FieldElement, Fp2, Fp6, Fp6Field};
use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};

/// Descriptor of `Fp12` with its Frobenius constants
#[derive(Debug)]
pub struct Fp12Field {
    base: Arc<Fp6Field>,
    /// γᵢ = ξ^(i·(p − 1)/6), so that `(wⁱ)^p = γᵢ·wⁱ`
    gamma: [Fp2; 6],
}

impl Fp12Field {
    /// Build `Fp6[w] / (w² − v)`; requires `p ≡ 1 mod 6`
    pub fn new(base: &Arc<Fp6Field>) -> Result<Arc<Self>> {
        let prime = base.base().base();
        validate::parameter(
            prime.modulus_mod(6) == 1,
            "modulus",
            "must be 1 mod 6 for the sextic tower",
        )?;
        let e = (prime.modulus() - &BigInt::one()).div_rem(&BigInt::from_u64(6))?.0;
        let g1 = base.xi().pow(&e);
        let mut gamma = Vec::with_capacity(6);
        gamma.push(Fp2::one(base.base()));
        for i in 1..6 {
            let next = gamma[i - 1].clone() * &g1;
            gamma.push(next);
        }
        let gamma: [Fp2; 6] = gamma
            .try_into()
            .map_err(|_| Error::param("gamma", "expected six Frobenius constants"))?;
        Ok(Arc::new(Self {
            base: Arc::clone(base),
            gamma,
        }))
    }

    /// The sextic field below
    pub fn base(&self) -> &Arc<Fp6Field> {
        &self.base
    }

    /// Frobenius constants γ₀..γ₅
    pub fn frobenius_constants(&self) -> &[Fp2; 6] {
        &self.gamma
    }
}

/// Element `c0 + c1·w` of `Fp12`
#[derive(Clone)]
pub struct Fp12 {
    field: Arc<Fp12Field>,
    c0: Fp6,
    c1: Fp6,
}

impl Fp12 {
    /// Build from `Fp6` halves
    pub fn new(field: &Arc<Fp12Field>, c0: Fp6, c1: Fp6) -> Self {
        Self {
            field: Arc::clone(field),
            c0,
            c1,
        }
    }

    /// Build from the six `Fp2` coefficients of `1, w, …, w⁵`
    pub fn from_w_coefficients(field: &Arc<Fp12Field>, a: [Fp2; 6]) -> Self {
        let [a0, a1, a2, a3, a4, a5] = a;
        Self::new(
            field,
            Fp6::new(&field.base, a0, a2, a4),
            Fp6::new(&field.base, a1, a3, a5),
        )
    }

    /// The six `Fp2` coefficients of `1, w, …, w⁵`
    pub fn to_w_coefficients(&self) -> [Fp2; 6] {
        let (a0, a2, a4) = self.c0.coefficients();
        let (a1, a3, a5) = self.c1.coefficients();
        [
            a0.clone(),
            a1.clone(),
            a2.clone(),
            a3.clone(),
            a4.clone(),
            a5.clone(),
        ]
    }

    /// The halves `(c0, c1)`
    pub fn halves(&self) -> (&Fp6, &Fp6) {
        (&self.c0, &self.c1)
    }

    /// `c0 − c1·w`, the `p⁶`-power Frobenius
    pub fn conjugate(&self) -> Self {
        Self::new(&self.field, self.c0.clone(), -&self.c1)
    }

    /// `self^(p^power)`
    pub fn frobenius(&self, power: usize) -> Self {
        let mut a = self.to_w_coefficients();
        for _ in 0..power {
            for (ai, gi) in a.iter_mut().zip(self.field.gamma.iter()) {
                *ai = ai.conjugate() * gi;
            }
        }
        Self::from_w_coefficients(&self.field, a)
    }

    pub(crate) fn add_inner(&self, rhs: &Self) -> Self {
        Self::new(&self.field, &self.c0 + &rhs.c0, &self.c1 + &rhs.c1)
    }

    pub(crate) fn sub_inner(&self, rhs: &Self) -> Self {
        Self::new(&self.field, &self.c0 - &rhs.c0, &self.c1 - &rhs.c1)
    }

    /// Karatsuba over `Fp6` with `w² = v`
    pub(crate) fn mul_inner(&self, rhs: &Self) -> Self {
        let t0 = &self.c0 * &rhs.c0;
        let t1 = &self.c1 * &rhs.c1;
        let c1 = (&self.c0 + &self.c1) * (&rhs.c0 + &rhs.c1) - &t0 - &t1;
        let c0 = t0 + t1.mul_by_v();
        Self::new(&self.field, c0, c1)
    }

    pub(crate) fn neg_inner(&self) -> Self {
        Self::new(&self.field, -&self.c0, -&self.c1)
    }
}

impl_field_ops!(Fp12);

impl FieldElement for Fp12 {
    type Field = Fp12Field;

    fn field(&self) -> &Arc<Fp12Field> {
        &self.field
    }

    fn zero(field: &Arc<Fp12Field>) -> Self {
        Self::new(field, Fp6::zero(&field.base), Fp6::zero(&field.base))
    }

    fn one(field: &Arc<Fp12Field>) -> Self {
        Self::new(field, Fp6::one(&field.base), Fp6::zero(&field.base))
    }

    fn from_u64(field: &Arc<Fp12Field>, v: u64) -> Self {
        Self::new(field, Fp6::from_u64(&field.base, v), Fp6::zero(&field.base))
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

    /// `(c0 − c1·w) / (c0² − c1²·v)`
    fn invert(&self) -> Result<Self> {
        let den = self.c0.square() - self.c1.square().mul_by_v();
        let inv = den.invert().map_err(|_| Error::NoInverse {
            context: "Fp12::invert",
        })?;
        Ok(Self::new(&self.field, &self.c0 * &inv, -(&self.c1 * &inv)))
    }

    fn encoded_len(field: &Arc<Fp12Field>) -> usize {
        2 * Fp6::encoded_len(&field.base)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c0.to_bytes();
        out.extend_from_slice(&self.c1.to_bytes());
        out
    }

    fn from_bytes(field: &Arc<Fp12Field>, bytes: &[u8]) -> Result<Self> {
        validate::length("Fp12::from_bytes", bytes.len(), Self::encoded_len(field))?;
        let (lo, hi) = bytes.split_at(Fp6::encoded_len(&field.base));
        Ok(Self::new(
            field,
            Fp6::from_bytes(&field.base, lo)?,
            Fp6::from_bytes(&field.base, hi)?,
        ))
    }

    fn from_uniform_bytes(field: &Arc<Fp12Field>, bytes: &[u8]) -> Self {
        let (lo, hi) = bytes.split_at(bytes.len() / 2);
        Self::new(
            field,
            Fp6::from_uniform_bytes(&field.base, lo),
            Fp6::from_uniform_bytes(&field.base, hi),
        )
    }
}

impl PartialEq for Fp12 {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl Eq for Fp12 {}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] + [{:?}]*w", self.c0, self.c1)
    }
}

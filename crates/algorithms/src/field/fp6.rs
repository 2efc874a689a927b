//! Cubic extension `Fp6 = Fp2[v] / (v³ − ξ)`

use core::fmt;
use std::sync::Arc;

use super::{split_uniform, FieldElement, Fp2, Fp2Field};
use crate::error::{validate, Error, Result};

/// Descriptor of `Fp6`: the quadratic field below it and the non-residue ξ
#[derive(Debug)]
pub struct Fp6Field {
    base: Arc<Fp2Field>,
    xi: Fp2,
}

impl Fp6Field {
    /// Build `Fp2[v] / (v³ − ξ)`
    ///
    /// ξ must be neither a square nor a cube in `Fp2`; the loader checks
    /// this before any tower is built.
    pub fn new(base: &Arc<Fp2Field>, xi: Fp2) -> Result<Arc<Self>> {
        validate::parameter(!xi.is_zero(), "xi", "must be nonzero")?;
        Ok(Arc::new(Self {
            base: Arc::clone(base),
            xi,
        }))
    }

    /// The quadratic field below
    pub fn base(&self) -> &Arc<Fp2Field> {
        &self.base
    }

    /// ξ with `v³ = ξ`
    pub fn xi(&self) -> &Fp2 {
        &self.xi
    }
}

/// Element `c0 + c1·v + c2·v²` of `Fp6`
#[derive(Clone)]
pub struct Fp6 {
    field: Arc<Fp6Field>,
    c0: Fp2,
    c1: Fp2,
    c2: Fp2,
}

impl Fp6 {
    /// Build from coefficients
    pub fn new(field: &Arc<Fp6Field>, c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self {
            field: Arc::clone(field),
            c0,
            c1,
            c2,
        }
    }

    /// Coefficients `(c0, c1, c2)`
    pub fn coefficients(&self) -> (&Fp2, &Fp2, &Fp2) {
        (&self.c0, &self.c1, &self.c2)
    }

    fn mul_by_xi(&self, a: &Fp2) -> Fp2 {
        a * &self.field.xi
    }

    /// Multiply by `v`: `(c0, c1, c2) → (ξ·c2, c0, c1)`
    pub fn mul_by_v(&self) -> Self {
        Self::new(
            &self.field,
            self.mul_by_xi(&self.c2),
            self.c0.clone(),
            self.c1.clone(),
        )
    }

    /// Multiply every coefficient by an `Fp2` scalar
    pub fn mul_by_fp2(&self, k: &Fp2) -> Self {
        Self::new(&self.field, &self.c0 * k, &self.c1 * k, &self.c2 * k)
    }

    pub(crate) fn add_inner(&self, rhs: &Self) -> Self {
        Self::new(
            &self.field,
            &self.c0 + &rhs.c0,
            &self.c1 + &rhs.c1,
            &self.c2 + &rhs.c2,
        )
    }

    pub(crate) fn sub_inner(&self, rhs: &Self) -> Self {
        Self::new(
            &self.field,
            &self.c0 - &rhs.c0,
            &self.c1 - &rhs.c1,
            &self.c2 - &rhs.c2,
        )
    }

    /// Three-way Karatsuba with reduction by `v³ = ξ`
    pub(crate) fn mul_inner(&self, rhs: &Self) -> Self {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        let (b0, b1, b2) = (&rhs.c0, &rhs.c1, &rhs.c2);

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        let t0 = (a1 + a2) * (b1 + b2) - &v1 - &v2;
        let c0 = &v0 + &self.mul_by_xi(&t0);

        let t1 = (a0 + a1) * (b0 + b1) - &v0 - &v1;
        let c1 = t1 + self.mul_by_xi(&v2);

        let c2 = (a0 + a2) * (b0 + b2) - &v0 - &v2 + &v1;

        Self::new(&self.field, c0, c1, c2)
    }

    pub(crate) fn neg_inner(&self) -> Self {
        Self::new(&self.field, -&self.c0, -&self.c1, -&self.c2)
    }
}

impl_field_ops!(Fp6);

impl FieldElement for Fp6 {
    type Field = Fp6Field;

    fn field(&self) -> &Arc<Fp6Field> {
        &self.field
    }

    fn zero(field: &Arc<Fp6Field>) -> Self {
        let z = Fp2::zero(&field.base);
        Self::new(field, z.clone(), z.clone(), z)
    }

    fn one(field: &Arc<Fp6Field>) -> Self {
        let z = Fp2::zero(&field.base);
        Self::new(field, Fp2::one(&field.base), z.clone(), z)
    }

    fn from_u64(field: &Arc<Fp6Field>, v: u64) -> Self {
        let z = Fp2::zero(&field.base);
        Self::new(field, Fp2::from_u64(&field.base, v), z.clone(), z)
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn square(&self) -> Self {
        self.mul_inner(self)
    }

    fn invert(&self) -> Result<Self> {
        let (c0, c1, c2) = (&self.c0, &self.c1, &self.c2);
        let t0 = c0.square() - self.mul_by_xi(&(c1 * c2));
        let t1 = self.mul_by_xi(&c2.square()) - c0 * c1;
        let t2 = c1.square() - c0 * c2;
        let den = c0 * &t0 + self.mul_by_xi(&(c2 * &t1 + c1 * &t2));
        let inv = den.invert().map_err(|_| Error::NoInverse {
            context: "Fp6::invert",
        })?;
        Ok(Self::new(&self.field, t0 * &inv, t1 * &inv, t2 * &inv))
    }

    fn encoded_len(field: &Arc<Fp6Field>) -> usize {
        3 * Fp2::encoded_len(&field.base)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c0.to_bytes();
        out.extend_from_slice(&self.c1.to_bytes());
        out.extend_from_slice(&self.c2.to_bytes());
        out
    }

    fn from_bytes(field: &Arc<Fp6Field>, bytes: &[u8]) -> Result<Self> {
        validate::length("Fp6::from_bytes", bytes.len(), Self::encoded_len(field))?;
        let n = Fp2::encoded_len(&field.base);
        Ok(Self::new(
            field,
            Fp2::from_bytes(&field.base, &bytes[..n])?,
            Fp2::from_bytes(&field.base, &bytes[n..2 * n])?,
            Fp2::from_bytes(&field.base, &bytes[2 * n..])?,
        ))
    }

    fn from_uniform_bytes(field: &Arc<Fp6Field>, bytes: &[u8]) -> Self {
        let parts = split_uniform(bytes, 3);
        Self::new(
            field,
            Fp2::from_uniform_bytes(&field.base, parts[0]),
            Fp2::from_uniform_bytes(&field.base, parts[1]),
            Fp2::from_uniform_bytes(&field.base, parts[2]),
        )
    }
}

impl PartialEq for Fp6 {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1 && self.c2 == other.c2
    }
}

impl Eq for Fp6 {}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

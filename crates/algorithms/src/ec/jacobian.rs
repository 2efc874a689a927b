//! Jacobian coordinates `(X : Y : Z) ↦ (X/Z², Y/Z³)` used for scalar
//! multiplication. `Z = 0` is the identity.

use std::sync::Arc;

use super::{Curve, CurvePoint};
use crate::field::FieldElement;

#[derive(Clone, Debug)]
pub(crate) struct Jacobian<F: FieldElement> {
    x: F,
    y: F,
    z: F,
}

impl<F: FieldElement> Jacobian<F> {
    pub(crate) fn identity(field: &Arc<F::Field>) -> Self {
        Self {
            x: F::one(field),
            y: F::one(field),
            z: F::zero(field),
        }
    }

    pub(crate) fn from_affine(p: &CurvePoint<F>) -> Self {
        match p.coordinates() {
            None => Self::identity(p.curve().field()),
            Some((x, y)) => Self {
                x: x.clone(),
                y: y.clone(),
                z: F::one(p.curve().field()),
            },
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub(crate) fn to_affine(&self, curve: &Arc<Curve<F>>) -> CurvePoint<F> {
        if self.is_identity() {
            return CurvePoint::identity(curve);
        }
        match self.z.invert() {
            Ok(zinv) => {
                let zinv2 = zinv.square();
                let zinv3 = zinv2.clone() * &zinv;
                CurvePoint::from_trusted(
                    curve,
                    self.x.clone() * &zinv2,
                    self.y.clone() * &zinv3,
                )
            }
            Err(_) => CurvePoint::identity(curve),
        }
    }

    /// dbl-2007-bl
    pub(crate) fn double(&self, a: &F) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();
        let s = ((self.x.clone() + &yy).square() - &xx - &yyyy).double();
        let m = xx.double() + &xx + &(a.clone() * &zz.square());
        let t = m.square() - &s.double();
        let y3 = m * &(s - &t) - &yyyy.double().double().double();
        let z3 = (self.y.clone() + &self.z).square() - &yy - &zz;
        Self { x: t, y: y3, z: z3 }
    }

    /// add-2007-bl, falling back to doubling for equal inputs
    pub(crate) fn add(&self, other: &Self, a: &F) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.clone() * &z2z2;
        let u2 = other.x.clone() * &z1z1;
        let s1 = self.y.clone() * &other.z * &z2z2;
        let s2 = other.y.clone() * &self.z * &z1z1;
        let h = u2 - &u1;
        let r = (s2 - &s1).double();
        if h.is_zero() {
            if r.is_zero() {
                return self.double(a);
            }
            return Self::identity(self.z.field());
        }
        let i = h.double().square();
        let j = h.clone() * &i;
        let v = u1 * &i;
        let x3 = r.square() - &j - &v.double();
        let y3 = r * &(v - &x3) - &(s1 * &j).double();
        let z3 = ((self.z.clone() + &other.z).square() - &z1z1 - &z2z2) * &h;
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub(crate) fn neg(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: -self.y.clone(),
            z: self.z.clone(),
        }
    }
}

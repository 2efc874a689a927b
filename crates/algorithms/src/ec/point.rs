//! Affine curve points and the group law

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use rand::{CryptoRng, RngCore};

use super::jacobian::Jacobian;
use super::{same_curve, Curve};
use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};
use crate::field::{FieldElement, SqrtField};

/// A point on a [`Curve`]: the identity, or affine `(x, y)` satisfying the
/// curve equation
#[derive(Clone)]
pub struct CurvePoint<F: FieldElement> {
    curve: Arc<Curve<F>>,
    coords: Option<(F, F)>,
}

impl<F: FieldElement> CurvePoint<F> {
    /// The point at infinity
    pub fn identity(curve: &Arc<Curve<F>>) -> Self {
        Self {
            curve: Arc::clone(curve),
            coords: None,
        }
    }

    /// Build from affine coordinates; fails with `PointNotOnCurve` when the
    /// curve equation does not hold
    pub fn new(curve: &Arc<Curve<F>>, x: F, y: F) -> Result<Self> {
        validate::on_curve(curve.contains(&x, &y), "CurvePoint::new")?;
        Ok(Self::from_trusted(curve, x, y))
    }

    /// Build from coordinates produced by the group law
    pub(crate) fn from_trusted(curve: &Arc<Curve<F>>, x: F, y: F) -> Self {
        debug_assert!(curve.contains(&x, &y));
        Self {
            curve: Arc::clone(curve),
            coords: Some((x, y)),
        }
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &Arc<Curve<F>> {
        &self.curve
    }

    /// True for the point at infinity
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// Affine coordinates, `None` for the identity
    pub fn coordinates(&self) -> Option<(&F, &F)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// Affine `x`, `None` for the identity
    pub fn x(&self) -> Option<&F> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    /// Affine `y`, `None` for the identity
    pub fn y(&self) -> Option<&F> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Re-check the curve equation
    pub fn is_on_curve(&self) -> bool {
        match &self.coords {
            None => true,
            Some((x, y)) => self.curve.contains(x, y),
        }
    }

    /// `−P`
    pub fn negate(&self) -> Self {
        Self {
            curve: Arc::clone(&self.curve),
            coords: self.coords.as_ref().map(|(x, y)| (x.clone(), -y.clone())),
        }
    }

    /// `P + Q` with the affine chord-and-tangent rule
    pub fn add_point(&self, other: &Self) -> Self {
        debug_assert!(same_curve(&self.curve, &other.curve));
        let ((x1, y1), (x2, y2)) = match (&self.coords, &other.coords) {
            (None, _) => return other.clone(),
            (_, None) => return self.clone(),
            (Some(p), Some(q)) => (p, q),
        };
        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            return Self::identity(&self.curve);
        }
        let lambda = match (y2.clone() - y1).div(&(x2.clone() - x1)) {
            Ok(l) => l,
            Err(_) => return Self::identity(&self.curve),
        };
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * &(x1.clone() - &x3) - y1;
        Self::from_trusted(&self.curve, x3, y3)
    }

    /// `2P`; the identity and points with `y = 0` double to the identity
    pub fn double(&self) -> Self {
        let (x, y) = match &self.coords {
            None => return self.clone(),
            Some(c) => c,
        };
        if y.is_zero() {
            return Self::identity(&self.curve);
        }
        let three_x2 = x.square().double() + &x.square();
        let lambda = match (three_x2 + self.curve.a()).div(&y.double()) {
            Ok(l) => l,
            Err(_) => return Self::identity(&self.curve),
        };
        let x3 = lambda.square() - &x.double();
        let y3 = lambda * &(x.clone() - &x3) - y;
        Self::from_trusted(&self.curve, x3, y3)
    }

    /// `k·P` by double-and-add from the most significant bit, in Jacobian
    /// coordinates; negative `k` multiplies `−P`
    pub fn mul_scalar(&self, k: &BigInt) -> Self {
        let a = self.curve.a();
        let base = if k.is_negative() {
            Jacobian::from_affine(self).neg()
        } else {
            Jacobian::from_affine(self)
        };
        let mut acc = Jacobian::identity(self.curve.field());
        for i in (0..k.bits()).rev() {
            acc = acc.double(a);
            if k.bit(i) {
                acc = acc.add(&base, a);
            }
        }
        acc.to_affine(&self.curve)
    }

    /// True when `r·P` is the identity
    pub fn is_torsion_free(&self) -> bool {
        self.mul_scalar(self.curve.order()).is_identity()
    }

    /// Map into the order-`r` subgroup by multiplying with the cofactor
    pub fn clear_cofactor(&self) -> Self {
        if self.curve.cofactor().is_one() {
            return self.clone();
        }
        self.mul_scalar(self.curve.cofactor())
    }
}

impl<F: SqrtField> CurvePoint<F> {
    /// The point with abscissa `x` whose ordinate has the given sign
    ///
    /// Fails with `NotASquare` when `x³ + ax + b` has no square root.
    pub fn from_x(curve: &Arc<Curve<F>>, x: F, sign: bool) -> Result<Self> {
        let y = curve.rhs(&x).sqrt()?;
        let y = if y.sign() == sign || y.is_zero() { y } else { -y };
        Ok(Self::from_trusted(curve, x, y))
    }

    /// A uniformly sampled point of the order-`r` subgroup, never the identity
    pub fn random<R: RngCore + CryptoRng>(curve: &Arc<Curve<F>>, rng: &mut R) -> Self {
        loop {
            let x = F::random(curve.field(), rng);
            let sign = rng.next_u32() & 1 == 1;
            if let Ok(p) = Self::from_x(curve, x, sign) {
                let p = p.clear_cofactor();
                if !p.is_identity() {
                    return p;
                }
            }
        }
    }
}

impl<F: FieldElement> PartialEq for CurvePoint<F> {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<F: FieldElement> Eq for CurvePoint<F> {}

impl<F: FieldElement> fmt::Debug for CurvePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            None => write!(f, "O"),
            Some((x, y)) => write!(f, "({:?}, {:?})", x, y),
        }
    }
}

impl<F: FieldElement> fmt::Display for CurvePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<'a, 'b, F: FieldElement> Add<&'b CurvePoint<F>> for &'a CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn add(self, rhs: &'b CurvePoint<F>) -> CurvePoint<F> {
        self.add_point(rhs)
    }
}

impl<F: FieldElement> Add for CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn add(self, rhs: CurvePoint<F>) -> CurvePoint<F> {
        self.add_point(&rhs)
    }
}

impl<'a, 'b, F: FieldElement> Sub<&'b CurvePoint<F>> for &'a CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn sub(self, rhs: &'b CurvePoint<F>) -> CurvePoint<F> {
        self.add_point(&rhs.negate())
    }
}

impl<F: FieldElement> Sub for CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn sub(self, rhs: CurvePoint<F>) -> CurvePoint<F> {
        self.add_point(&rhs.negate())
    }
}

impl<'a, F: FieldElement> Neg for &'a CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn neg(self) -> CurvePoint<F> {
        self.negate()
    }
}

impl<F: FieldElement> Neg for CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn neg(self) -> CurvePoint<F> {
        self.negate()
    }
}

impl<'a, 'b, F: FieldElement> Mul<&'b BigInt> for &'a CurvePoint<F> {
    type Output = CurvePoint<F>;

    fn mul(self, k: &'b BigInt) -> CurvePoint<F> {
        self.mul_scalar(k)
    }
}

/// Check a decoded point against the curve it claims to lie on
pub(crate) fn check_decoded<F: FieldElement>(
    curve: &Arc<Curve<F>>,
    x: F,
    y: F,
    context: &'static str,
) -> Result<CurvePoint<F>> {
    if !curve.contains(&x, &y) {
        return Err(Error::PointNotOnCurve { context });
    }
    Ok(CurvePoint::from_trusted(curve, x, y))
}

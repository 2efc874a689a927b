//! Short Weierstrass curves over any field of the tower.
//!
//! [`Curve`] and [`CurvePoint`] are generic over [`FieldElement`], so the
//! same group law serves G1 over `Fp` and G2 over the twist field `Fp2`.

use core::fmt;
use std::sync::Arc;

use crate::bigint::BigInt;
use crate::error::{validate, Result};
use crate::field::FieldElement;

mod encoding;
mod hash;
mod jacobian;
mod point;


pub use encoding::PointFormat;
pub use hash::expand_message;
pub use point::CurvePoint;

/// `y² = x³ + a·x + b` together with a prime subgroup order and cofactor
pub struct Curve<F: FieldElement> {
    field: Arc<F::Field>,
    a: F,
    b: F,
    order: BigInt,
    cofactor: BigInt,
}

impl<F: FieldElement> Curve<F> {
    /// Build a curve, rejecting singular coefficient pairs
    ///
    /// `order` is the prime `r` of the subgroup used for pairings and
    /// `cofactor` maps the full group of rational points onto it.
    pub fn new(a: F, b: F, order: BigInt, cofactor: BigInt) -> Result<Arc<Self>> {
        // 4a³ + 27b² ≠ 0
        let four = F::from_u64(a.field(), 4);
        let twenty_seven = F::from_u64(a.field(), 27);
        let disc = four * &(a.square() * &a) + twenty_seven * &b.square();
        validate::parameter(!disc.is_zero(), "curve", "singular coefficients")?;
        validate::parameter(order.is_positive(), "order", "must be positive")?;
        validate::parameter(cofactor.is_positive(), "cofactor", "must be positive")?;
        Ok(Arc::new(Self {
            field: Arc::clone(a.field()),
            a,
            b,
            order,
            cofactor,
        }))
    }

    /// Field of definition
    pub fn field(&self) -> &Arc<F::Field> {
        &self.field
    }

    /// Coefficient `a`
    pub fn a(&self) -> &F {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &F {
        &self.b
    }

    /// Prime order `r` of the pairing subgroup
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Cofactor mapping rational points into the order-`r` subgroup
    pub fn cofactor(&self) -> &BigInt {
        &self.cofactor
    }

    /// `x³ + a·x + b`
    pub(crate) fn rhs(&self, x: &F) -> F {
        x.square() * x + self.a.clone() * x + &self.b
    }

    /// True when `(x, y)` satisfies the curve equation
    pub fn contains(&self, x: &F, y: &F) -> bool {
        y.square() == self.rhs(x)
    }
}

impl<F: FieldElement> PartialEq for Curve<F> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
            && self.b == other.b
            && self.order == other.order
            && self.cofactor == other.cofactor
    }
}

impl<F: FieldElement> Eq for Curve<F> {}

impl<F: FieldElement> fmt::Debug for Curve<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("order", &self.order)
            .field("cofactor", &self.cofactor)
            .finish()
    }
}

/// Same curve, either by identity or by value
pub(crate) fn same_curve<F: FieldElement>(a: &Arc<Curve<F>>, b: &Arc<Curve<F>>) -> bool {
    Arc::ptr_eq(a, b) || **a == **b
}

//! Bilinear pairings `e: G1 × G2 → GT`
//!
//! Each engine owns its curves and target field. [`PairingEngine::pair`]
//! checks that both inputs lie in the order-`r` subgroups of this engine's
//! curves before running the Miller loop and the final exponentiation.

use std::sync::Arc;

use tracing::trace_span;

use crate::bigint::BigInt;
use crate::ec::{same_curve, Curve, CurvePoint};
use crate::error::{validate, Result};
use crate::field::{FieldElement, SqrtField};

mod type_a;
mod type_f;

#[cfg(test)]
mod tests;

pub use type_a::TypeAPairing;
pub use type_f::TypeFPairing;

/// A pairing over a fixed pair of curves
pub trait PairingEngine: Send + Sync {
    /// Field of definition of G1
    type Base: SqrtField;
    /// Field of definition of G2
    type Twist: SqrtField;
    /// Field holding GT
    type Target: FieldElement;

    /// The curve carrying G1
    fn g1_curve(&self) -> &Arc<Curve<Self::Base>>;

    /// The curve carrying G2
    fn g2_curve(&self) -> &Arc<Curve<Self::Twist>>;

    /// The field holding GT
    fn target_field(&self) -> &Arc<<Self::Target as FieldElement>::Field>;

    /// The prime `r` shared by G1, G2 and GT
    fn order(&self) -> &BigInt {
        self.g1_curve().order()
    }

    /// Smallest `k` with `r | q^k − 1`
    fn embedding_degree(&self) -> u32;

    /// True when G1 and G2 are the same group
    fn is_symmetric(&self) -> bool;

    /// Miller function value before the final exponentiation
    ///
    /// Inputs are assumed to be subgroup members; an identity input yields
    /// one.
    fn miller_loop(
        &self,
        p: &CurvePoint<Self::Base>,
        q: &CurvePoint<Self::Twist>,
    ) -> Result<Self::Target>;

    /// Raise a Miller loop output into the order-`r` subgroup of GT
    fn final_exponentiation(&self, f: &Self::Target) -> Result<Self::Target>;

    /// `e(p, q)`
    ///
    /// Fails with `InvalidPoint` when either input is not an order-`r`
    /// point of this engine's curves.
    fn pair(
        &self,
        p: &CurvePoint<Self::Base>,
        q: &CurvePoint<Self::Twist>,
    ) -> Result<Self::Target> {
        check_member(self.g1_curve(), p, "pair: first argument")?;
        check_member(self.g2_curve(), q, "pair: second argument")?;
        if p.is_identity() || q.is_identity() {
            return Ok(Self::Target::one(self.target_field()));
        }
        let _span = trace_span!("pair", degree = self.embedding_degree()).entered();
        let f = self.miller_loop(p, q)?;
        self.final_exponentiation(&f)
    }
}

/// The subgroup membership check run on every pairing input
pub fn check_member<F: FieldElement>(
    curve: &Arc<Curve<F>>,
    point: &CurvePoint<F>,
    context: &'static str,
) -> Result<()> {
    validate::member(
        same_curve(curve, point.curve()),
        context,
        "point belongs to a different curve",
    )?;
    validate::member(point.is_on_curve(), context, "point is not on the curve")?;
    validate::member(
        point.is_torsion_free(),
        context,
        "point is outside the order-r subgroup",
    )
}

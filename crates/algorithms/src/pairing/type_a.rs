//! Reduced Tate pairing on the supersingular curve `y² = x³ + x`
//!
//! For `q ≡ 3 mod 4` the curve has `q + 1` points and embedding degree 2.
//! The distortion map `φ(x, y) = (−x, i·y)` into `E(F_q²)` makes the pairing
//! symmetric, so G1 and G2 are the same group.

use std::sync::Arc;

use tracing::trace_span;

use super::PairingEngine;
use crate::bigint::BigInt;
use crate::ec::{Curve, CurvePoint};
use crate::error::{validate, Result};
use crate::field::{FieldElement, Fp, Fp2, Fp2Field, PrimeField};

/// Type A pairing engine
#[derive(Clone, Debug)]
pub struct TypeAPairing {
    curve: Arc<Curve<Fp>>,
    target: Arc<Fp2Field>,
    /// `(q + 1) / r`; the final exponent is `(q − 1)·h`
    cofactor: BigInt,
}

impl TypeAPairing {
    /// Build the engine over `F_q` for the subgroup of prime order `r`
    ///
    /// Requires `q ≡ 3 mod 4` and `q + 1 = h·r`.
    pub fn new(q: &BigInt, r: &BigInt, h: &BigInt) -> Result<Self> {
        let fp = PrimeField::new(q.clone())?;
        validate::parameter(fp.modulus_mod(4) == 3, "q", "must be 3 mod 4")?;
        validate::parameter(
            h * r == q + &BigInt::one(),
            "h",
            "h·r must equal q + 1",
        )?;
        let curve = Curve::new(Fp::one(&fp), Fp::zero(&fp), r.clone(), h.clone())?;
        let target = Fp2Field::new(&fp, &BigInt::from_i64(-1))?;
        Ok(Self {
            curve,
            target,
            cofactor: h.clone(),
        })
    }

    /// The cofactor `h = (q + 1) / r`
    pub fn cofactor(&self) -> &BigInt {
        &self.cofactor
    }

    /// Tangent or chord through `t` with slope `lambda`, evaluated at `φ(q)`
    ///
    /// `y − y_T − λ(x − x_T)` at `(−x_Q, i·y_Q)` is
    /// `(λ(x_Q + x_T) − y_T) + y_Q·i`.
    fn line(&self, lambda: &Fp, xt: &Fp, yt: &Fp, xq: &Fp, yq: &Fp) -> Fp2 {
        let re = lambda.clone() * &(xq.clone() + xt) - yt;
        Fp2::new(&self.target, re, yq.clone())
    }
}

impl PairingEngine for TypeAPairing {
    type Base = Fp;
    type Twist = Fp;
    type Target = Fp2;

    fn g1_curve(&self) -> &Arc<Curve<Fp>> {
        &self.curve
    }

    fn g2_curve(&self) -> &Arc<Curve<Fp>> {
        &self.curve
    }

    fn target_field(&self) -> &Arc<Fp2Field> {
        &self.target
    }

    fn embedding_degree(&self) -> u32 {
        2
    }

    fn is_symmetric(&self) -> bool {
        true
    }

    /// `f_{r,P}(φ(Q))` by double-and-add over the bits of `r`
    ///
    /// Vertical lines evaluate into `F_q` and vanish under the final
    /// exponentiation, so they are skipped.
    fn miller_loop(&self, p: &CurvePoint<Fp>, q: &CurvePoint<Fp>) -> Result<Fp2> {
        let _span = trace_span!("miller_loop", kind = "a").entered();
        let mut f = Fp2::one(&self.target);
        let ((xp, yp), (xq, yq)) = match (p.coordinates(), q.coordinates()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(f),
        };
        let r = self.curve.order();
        let three = Fp::from_u64(xp.field(), 3);
        let mut t = p.clone();

        for i in (0..r.bits().saturating_sub(1)).rev() {
            // doubling step
            if let Some((xt, yt)) = t.coordinates() {
                if yt.is_zero() {
                    t = CurvePoint::identity(&self.curve);
                } else {
                    let lambda = (three.clone() * &xt.square() + self.curve.a()).div(&yt.double())?;
                    let l = self.line(&lambda, xt, yt, xq, yq);
                    f = f.square() * &l;
                    t = t.double();
                }
            }

            if !r.bit(i) {
                continue;
            }

            // addition step
            let (xt, yt) = match t.coordinates() {
                Some(c) => c,
                None => {
                    t = p.clone();
                    continue;
                }
            };
            if xt == xp {
                // T = ±P; in the subgroup walk only T = −P occurs
                t = &t + p;
                continue;
            }
            let lambda = (yp.clone() - yt).div(&(xp.clone() - xt))?;
            let l = self.line(&lambda, xt, yt, xq, yq);
            f = f * &l;
            t = &t + p;
        }
        Ok(f)
    }

    /// `f^((q² − 1)/r) = (f^(q − 1))^h` with `f^q = conj(f)`
    fn final_exponentiation(&self, f: &Fp2) -> Result<Fp2> {
        let _span = trace_span!("final_exponentiation", kind = "a").entered();
        let easy = f.conjugate() * &f.invert()?;
        Ok(easy.pow(&self.cofactor))
    }
}

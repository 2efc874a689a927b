//! Ate pairing on Barreto–Naehrig curves
//!
//! G1 is `E: y² = x³ + b` over `F_q` with prime order `r`. G2 lives on the
//! sextic twist `E': y² = x³ + b/ξ` over `F_q²`, and GT in
//! `F_q¹² = F_q²[w] / (w⁶ − ξ)`. The untwisting map sends `(x', y')` to
//! `(x'·w², y'·w³)`.

use std::sync::Arc;

use tracing::trace_span;

use super::PairingEngine;
use crate::bigint::BigInt;
use crate::ec::{Curve, CurvePoint};
use crate::error::{validate, Result};
use crate::field::{FieldElement, Fp, Fp12, Fp12Field, Fp2, Fp2Field, Fp6Field, PrimeField};

/// Type F pairing engine
#[derive(Clone, Debug)]
pub struct TypeFPairing {
    g1: Arc<Curve<Fp>>,
    g2: Arc<Curve<Fp2>>,
    target: Arc<Fp12Field>,
    /// Miller loop length `t − 1 = q − r`
    loop_count: BigInt,
    /// `(q⁴ − q² + 1) / r`
    hard_exponent: BigInt,
}

impl TypeFPairing {
    /// Build the engine from the curve constant `b`, the `F_q²` non-residue
    /// `β` and the sextic non-residue `ξ = alpha0 + alpha1·u`
    pub fn new(
        q: &BigInt,
        r: &BigInt,
        b: &BigInt,
        beta: &BigInt,
        alpha0: &BigInt,
        alpha1: &BigInt,
    ) -> Result<Self> {
        let fp = PrimeField::new(q.clone())?;
        let fp2 = Fp2Field::new(&fp, beta)?;
        let xi = Fp2::from_bigints(&fp2, alpha0, alpha1);
        let fp6 = Fp6Field::new(&fp2, xi.clone())?;
        let target = Fp12Field::new(&fp6)?;

        let loop_count = q - r;
        validate::parameter(loop_count.is_positive(), "r", "must be smaller than q")?;

        let q2 = q * q;
        let (hard_exponent, rem) = (&q2 * &q2 - &q2 + BigInt::one()).div_rem(r)?;
        validate::parameter(rem.is_zero(), "r", "must divide q⁴ − q² + 1")?;

        let b = Fp::new(&fp, b);
        let g1 = Curve::new(Fp::zero(&fp), b.clone(), r.clone(), BigInt::one())?;

        let b_twist = Fp2::from_base(&fp2, b).div(&xi)?;
        let g2_cofactor = q + q - r;
        let g2 = Curve::new(Fp2::zero(&fp2), b_twist, r.clone(), g2_cofactor)?;

        Ok(Self {
            g1,
            g2,
            target,
            loop_count,
            hard_exponent,
        })
    }

    /// Line through `(xr, yr)` with slope `lambda`, evaluated at the
    /// untwisted image of `(xp, yp)`
    ///
    /// Scaled by `w³`, the line is `y_P − λ·x_P·w + (λ·x_R − y_R)·w³`.
    fn line(&self, lambda: &Fp2, xr: &Fp2, yr: &Fp2, xp: &Fp, yp: &Fp) -> Fp12 {
        let fp2 = self.g2.field();
        let zero = Fp2::zero(fp2);
        Fp12::from_w_coefficients(
            &self.target,
            [
                Fp2::from_base(fp2, yp.clone()),
                -lambda.mul_by_base(xp),
                zero.clone(),
                lambda.clone() * xr - yr,
                zero.clone(),
                zero,
            ],
        )
    }
}

impl PairingEngine for TypeFPairing {
    type Base = Fp;
    type Twist = Fp2;
    type Target = Fp12;

    fn g1_curve(&self) -> &Arc<Curve<Fp>> {
        &self.g1
    }

    fn g2_curve(&self) -> &Arc<Curve<Fp2>> {
        &self.g2
    }

    fn target_field(&self) -> &Arc<Fp12Field> {
        &self.target
    }

    fn embedding_degree(&self) -> u32 {
        12
    }

    fn is_symmetric(&self) -> bool {
        false
    }

    /// `f_{t−1,Q}(P)`, walking `R` from `Q` over the bits of `t − 1`
    fn miller_loop(&self, p: &CurvePoint<Fp>, q: &CurvePoint<Fp2>) -> Result<Fp12> {
        let _span = trace_span!("miller_loop", kind = "f").entered();
        let mut f = Fp12::one(&self.target);
        let ((xp, yp), (xq, yq)) = match (p.coordinates(), q.coordinates()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(f),
        };
        let three = Fp2::from_u64(self.g2.field(), 3);
        let s = &self.loop_count;
        let mut r = q.clone();

        for i in (0..s.bits().saturating_sub(1)).rev() {
            if let Some((xr, yr)) = r.coordinates() {
                if yr.is_zero() {
                    r = CurvePoint::identity(&self.g2);
                } else {
                    let lambda = (three.clone() * &xr.square()).div(&yr.double())?;
                    let l = self.line(&lambda, xr, yr, xp, yp);
                    f = f.square() * &l;
                    r = r.double();
                }
            }

            if !s.bit(i) {
                continue;
            }

            let (xr, yr) = match r.coordinates() {
                Some(c) => c,
                None => {
                    r = q.clone();
                    continue;
                }
            };
            if xr == xq {
                // vertical line, killed by the final exponentiation
                r = &r + q;
                continue;
            }
            let lambda = (yq.clone() - yr).div(&(xq.clone() - xr))?;
            let l = self.line(&lambda, xr, yr, xp, yp);
            f = f * &l;
            r = &r + q;
        }
        Ok(f)
    }

    /// Easy part `f^((q⁶ − 1)(q² + 1))`, then the hard part by plain
    /// exponentiation
    fn final_exponentiation(&self, f: &Fp12) -> Result<Fp12> {
        let _span = trace_span!("final_exponentiation", kind = "f").entered();
        let easy = f.conjugate() * &f.invert()?;
        let easy = easy.frobenius(2) * &easy;
        Ok(easy.pow(&self.hard_exponent))
    }
}

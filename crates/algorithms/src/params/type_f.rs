//! Type F parameters: Barreto–Naehrig curves `y² = x³ + b` with k = 12

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{malformed_from, Description};
use crate::bigint::{BigInt, MILLER_RABIN_ROUNDS};
use crate::ec::CurvePoint;
use crate::error::{validate, Result};
use crate::field::{FieldElement, Fp2, Fp2Field, PrimeField, SqrtField};
use crate::pairing::{PairingEngine, TypeFPairing};

/// Keys read from a type F description
pub const TYPE_F_KEYS: [&str; 6] = ["q", "r", "b", "beta", "alpha0", "alpha1"];

const G1_CHECK_SEED: &[u8] = b"pbcrypt type f g1 check";
const G2_CHECK_SEED: &[u8] = b"pbcrypt type f g2 check";

/// Numeric content of a type F description
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeFParams {
    /// Field characteristic
    pub q: BigInt,
    /// Prime group order
    pub r: BigInt,
    /// Curve constant
    pub b: BigInt,
    /// Quadratic non-residue defining `F_q² = F_q[u] / (u² − β)`
    pub beta: BigInt,
    /// Constant coefficient of the sextic non-residue ξ
    pub alpha0: BigInt,
    /// `u` coefficient of ξ
    pub alpha1: BigInt,
}

impl TypeFParams {
    /// Read the numeric fields; no consistency checks
    pub fn from_description(desc: &Description) -> Result<Self> {
        Ok(Self {
            q: desc.integer("q")?,
            r: desc.integer("r")?,
            b: desc.integer("b")?,
            beta: desc.integer("beta")?,
            alpha0: desc.integer("alpha0")?,
            alpha1: desc.integer("alpha1")?,
        })
    }

    /// Render back into `key value` form
    pub fn to_description(&self) -> Description {
        Description::from_entries(
            "f",
            [
                ("q", self.q.to_string()),
                ("r", self.r.to_string()),
                ("b", self.b.to_string()),
                ("beta", self.beta.to_string()),
                ("alpha0", self.alpha0.to_string()),
                ("alpha1", self.alpha1.to_string()),
            ],
        )
    }

    /// Trace of Frobenius `t = q + 1 − r`
    pub fn trace(&self) -> BigInt {
        &self.q + &BigInt::one() - &self.r
    }

    /// Run every check and build the engine
    ///
    /// Checked: q and r are probable primes, `q ≡ 1 mod 6`, β is a
    /// non-residue, ξ is neither a square nor a cube in `F_q²`, the Hasse
    /// bound `t² ≤ 4q`, `r | q⁴ − q² + 1`, `t − 1 > 0`, and that hashed
    /// points on the curve and on the twist have order r. Trusted: the full
    /// group orders `r` and `r·(2q − r)` beyond the sampled points.
    pub fn validate(&self) -> Result<TypeFPairing> {
        validate::well_formed(
            self.q.is_probable_prime(MILLER_RABIN_ROUNDS),
            "q",
            "not a probable prime",
        )?;
        validate::well_formed(
            self.r.is_probable_prime(MILLER_RABIN_ROUNDS),
            "r",
            "not a probable prime",
        )?;

        let fp = PrimeField::new(self.q.clone()).map_err(malformed_from("q"))?;
        validate::well_formed(fp.modulus_mod(6) == 1, "q", "must be 1 mod 6")?;
        let fp2 = Fp2Field::new(&fp, &self.beta).map_err(malformed_from("beta"))?;

        let xi = Fp2::from_bigints(&fp2, &self.alpha0, &self.alpha1);
        validate::well_formed(!xi.is_zero(), "alpha0", "ξ must be nonzero")?;
        validate::well_formed(!xi.is_square(), "alpha0", "ξ must not be a square")?;
        let q2_minus_1 = &self.q * &self.q - &BigInt::one();
        let (third, _) = q2_minus_1
            .div_rem(&BigInt::from_u64(3))
            .map_err(malformed_from("q"))?;
        validate::well_formed(!xi.pow(&third).is_one(), "alpha0", "ξ must not be a cube")?;

        let t = self.trace();
        validate::well_formed(
            t.abs() <= (BigInt::from_u64(4) * &self.q).isqrt().map_err(malformed_from("q"))?,
            "r",
            "trace violates the Hasse bound",
        )?;
        validate::well_formed(
            (&t - &BigInt::one()).is_positive(),
            "r",
            "ate loop length t − 1 must be positive",
        )?;
        let q2 = &self.q * &self.q;
        let embedding = &q2 * &q2 - &q2 + BigInt::one();
        let (_, rem) = embedding.div_rem(&self.r).map_err(malformed_from("r"))?;
        validate::well_formed(rem.is_zero(), "r", "must divide q⁴ − q² + 1")?;

        let engine = TypeFPairing::new(
            &self.q,
            &self.r,
            &self.b,
            &self.beta,
            &self.alpha0,
            &self.alpha1,
        )
        .map_err(malformed_from("type"))?;

        let p = CurvePoint::hash_to_curve(engine.g1_curve(), G1_CHECK_SEED)
            .map_err(malformed_from("b"))?;
        validate::well_formed(
            !p.is_identity() && p.is_torsion_free(),
            "r",
            "hashed G1 point does not have order r",
        )?;
        let q = CurvePoint::hash_to_curve(engine.g2_curve(), G2_CHECK_SEED)
            .map_err(malformed_from("b"))?;
        validate::well_formed(
            !q.is_identity() && q.is_torsion_free(),
            "r",
            "hashed twist point does not have order r",
        )?;
        Ok(engine)
    }
}

//! Type A parameters: `y² = x³ + x` over `F_q`, `q ≡ 3 mod 4`

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{malformed_from, Description};
use crate::bigint::{BigInt, MILLER_RABIN_ROUNDS};
use crate::ec::CurvePoint;
use crate::error::{validate, Error, Result};
use crate::pairing::{PairingEngine, TypeAPairing};

/// Keys read from a type A description
pub const TYPE_A_KEYS: [&str; 7] = ["q", "h", "r", "exp2", "exp1", "sign1", "sign0"];

/// Input to the hashed subgroup check
const CHECK_POINT_SEED: &[u8] = b"pbcrypt type a parameter check";

/// Numeric content of a type A description
///
/// `r = 2^exp2 + sign1·2^exp1 + sign0` is the Solinas form of the group
/// order and `q + 1 = h·r`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeAParams {
    /// Field characteristic
    pub q: BigInt,
    /// Cofactor
    pub h: BigInt,
    /// Prime subgroup order
    pub r: BigInt,
    /// Leading exponent of `r`
    pub exp2: u32,
    /// Middle exponent of `r`
    pub exp1: u32,
    /// Sign of the middle term
    pub sign1: i32,
    /// Sign of the constant term
    pub sign0: i32,
}

fn exponent(desc: &Description, key: &'static str) -> Result<u32> {
    u32::try_from(desc.small_integer(key)?)
        .map_err(|_| Error::malformed(key, "must be a non-negative exponent"))
}

fn sign(desc: &Description, key: &'static str) -> Result<i32> {
    let v = desc.small_integer(key)?;
    validate::well_formed(v == 1 || v == -1, key, "must be 1 or -1")?;
    Ok(v as i32)
}

impl TypeAParams {
    /// Read the numeric fields; no consistency checks
    pub fn from_description(desc: &Description) -> Result<Self> {
        Ok(Self {
            q: desc.integer("q")?,
            h: desc.integer("h")?,
            r: desc.integer("r")?,
            exp2: exponent(desc, "exp2")?,
            exp1: exponent(desc, "exp1")?,
            sign1: sign(desc, "sign1")?,
            sign0: sign(desc, "sign0")?,
        })
    }

    /// Render back into `key value` form
    pub fn to_description(&self) -> Description {
        Description::from_entries(
            "a",
            [
                ("q", self.q.to_string()),
                ("h", self.h.to_string()),
                ("r", self.r.to_string()),
                ("exp2", self.exp2.to_string()),
                ("exp1", self.exp1.to_string()),
                ("sign1", self.sign1.to_string()),
                ("sign0", self.sign0.to_string()),
            ],
        )
    }

    /// `2^exp2 + sign1·2^exp1 + sign0`
    pub fn solinas_order(&self) -> BigInt {
        let two = BigInt::from_u64(2);
        two.pow(self.exp2) + BigInt::from_i64(self.sign1 as i64) * two.pow(self.exp1)
            + BigInt::from_i64(self.sign0 as i64)
    }

    /// Run every check and build the engine
    ///
    /// Checked: q and r are probable primes, `q ≡ 3 mod 4`, `q + 1 = h·r`,
    /// the Solinas form of r, and that a hashed curve point lands in a
    /// non-trivial subgroup of order r. Trusted: that `#E(F_q) = q + 1`
    /// beyond what the sampled point shows.
    pub fn validate(&self) -> Result<TypeAPairing> {
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
        validate::well_formed(
            self.q.modulo(&BigInt::from_u64(4)).map_err(malformed_from("q"))?
                == BigInt::from_u64(3),
            "q",
            "must be 3 mod 4",
        )?;
        validate::well_formed(
            &self.h * &self.r == &self.q + &BigInt::one(),
            "h",
            "h·r must equal q + 1",
        )?;
        validate::well_formed(
            self.exp2 > self.exp1 && self.exp1 > 0,
            "exp1",
            "exponents must satisfy exp2 > exp1 > 0",
        )?;
        // r has exp2 or exp2 + 1 bits; bound exp2 before materialising 2^exp2
        validate::well_formed(
            self.exp2 as usize <= self.r.bits(),
            "exp2",
            "larger than the bit length of r",
        )?;
        validate::well_formed(
            self.solinas_order() == self.r,
            "r",
            "does not match 2^exp2 + sign1·2^exp1 + sign0",
        )?;

        let engine = TypeAPairing::new(&self.q, &self.r, &self.h).map_err(malformed_from("type"))?;
        let point = CurvePoint::hash_to_curve(engine.g1_curve(), CHECK_POINT_SEED)
            .map_err(malformed_from("h"))?;
        validate::well_formed(
            !point.is_identity() && point.is_torsion_free(),
            "r",
            "hashed point does not have order r",
        )?;
        Ok(engine)
    }
}

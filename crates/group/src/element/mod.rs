//! Values in G1, G2, GT and Z_r
//!
//! An [`Element`] pairs a value with the [`Pairing`] and [`GroupKind`] it was
//! created for. G1 and G2 are written additively, GT multiplicatively, and
//! Z_r is the ring of integers modulo the group order. The identity of every
//! source and target group counts as both zero and one.
//!
//! Decoding always validates: curve points must lie in the order-r subgroup,
//! GT values must satisfy `f^r = 1`, and Z_r encodings must be below r.

use core::fmt;
use std::sync::Arc;

use pbcrypt_algorithms::ec::expand_message;
use pbcrypt_algorithms::error::to_core_result;
use pbcrypt_algorithms::pairing::check_member;
use pbcrypt_algorithms::{
    BigInt, Curve, CurvePoint, FieldElement, Fp, Fp12, Fp2, PairingEngine, PairingParameters,
    TypeAPairing, TypeFPairing,
};
use pbcrypt_api::{Error, GroupKind, Result, Serialize};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::pairing::Pairing;

mod arith;


/// Extra hash output beyond the value width to flatten the reduction bias
const EXTRA_BYTES: usize = 16;

/// An integer in `[0, r)`, wiped from memory when dropped
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Scalar(pub(crate) BigInt);

/// Representation of an element's value
#[derive(Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Scalar(Scalar),
    /// G1 of either type, and G2 of type A
    Base(CurvePoint<Fp>),
    /// G2 of type F
    Twist(CurvePoint<Fp2>),
    /// GT of type A
    Quadratic(Fp2),
    /// GT of type F
    Dodecic(Fp12),
}

/// Where the values of one group live
enum Slot<'a> {
    Scalar,
    Base(&'a Arc<Curve<Fp>>),
    Twist(&'a Arc<Curve<Fp2>>),
    Quadratic(&'a TypeAPairing),
    Dodecic(&'a TypeFPairing),
}

fn slot(pairing: &Pairing, group: GroupKind) -> Slot<'_> {
    match (group, pairing.parameters()) {
        (GroupKind::Zr, _) => Slot::Scalar,
        (GroupKind::G1, params) => Slot::Base(params.g1_curve()),
        (GroupKind::G2, PairingParameters::TypeA { engine, .. }) => Slot::Base(engine.g2_curve()),
        (GroupKind::G2, PairingParameters::TypeF { engine, .. }) => Slot::Twist(engine.g2_curve()),
        (GroupKind::GT, PairingParameters::TypeA { engine, .. }) => Slot::Quadratic(engine.as_ref()),
        (GroupKind::GT, PairingParameters::TypeF { engine, .. }) => Slot::Dodecic(engine.as_ref()),
    }
}

/// An element of one of the four groups of a pairing
#[derive(Clone)]
pub struct Element {
    pairing: Pairing,
    group: GroupKind,
    value: Value,
}

// ============================================================================
// Construction
// ============================================================================

impl Element {
    pub(crate) fn from_parts(pairing: Pairing, group: GroupKind, value: Value) -> Self {
        Self {
            pairing,
            group,
            value,
        }
    }

    /// Same pairing and group, new value
    pub(crate) fn with_value(&self, value: Value) -> Self {
        Self::from_parts(self.pairing.clone(), self.group, value)
    }

    /// Additive identity of Z_r, or the identity of G1, G2 and GT
    pub fn zero(pairing: &Pairing, group: GroupKind) -> Self {
        Self::from_parts(pairing.clone(), group, identity(pairing, group, false))
    }

    /// Multiplicative identity of Z_r, or the identity of G1, G2 and GT
    pub fn one(pairing: &Pairing, group: GroupKind) -> Self {
        Self::from_parts(pairing.clone(), group, identity(pairing, group, true))
    }

    /// Uniformly random element
    ///
    /// Curve groups sample a non-identity point of order r; GT raises a
    /// random target field value through the final exponentiation.
    pub fn random<R: RngCore + CryptoRng>(pairing: &Pairing, group: GroupKind, rng: &mut R) -> Self {
        let value = match slot(pairing, group) {
            Slot::Scalar => Value::Scalar(random_scalar(pairing, rng)),
            Slot::Base(curve) => Value::Base(CurvePoint::random(curve, rng)),
            Slot::Twist(curve) => Value::Twist(CurvePoint::random(curve, rng)),
            Slot::Quadratic(engine) => loop {
                let f = Fp2::random(engine.target_field(), rng);
                if let Ok(g) = engine.final_exponentiation(&f) {
                    break Value::Quadratic(g);
                }
            },
            Slot::Dodecic(engine) => loop {
                let f = Fp12::random(engine.target_field(), rng);
                if let Ok(g) = engine.final_exponentiation(&f) {
                    break Value::Dodecic(g);
                }
            },
        };
        Self::from_parts(pairing.clone(), group, value)
    }

    /// The residue of `n` in Z_r; negative integers wrap around
    pub fn from_int(pairing: &Pairing, n: &BigInt) -> Result<Self> {
        let value = Value::Scalar(reduce(pairing, n, "Element::from_int")?);
        Ok(Self::from_parts(pairing.clone(), GroupKind::Zr, value))
    }

    /// Deterministically map `data` into the group
    ///
    /// Curve groups use try-and-increment hashing with cofactor clearing, so
    /// the result is a non-identity point of order r.
    pub fn from_hash(pairing: &Pairing, group: GroupKind, data: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "Element::from_hash";
        let value = match slot(pairing, group) {
            Slot::Scalar => {
                let bytes = expand_message(data, 0, pairing.scalar_len() + EXTRA_BYTES);
                Value::Scalar(reduce(pairing, &BigInt::from_bytes_be(&bytes), CONTEXT)?)
            }
            Slot::Base(curve) => {
                Value::Base(to_core_result(CurvePoint::hash_to_curve(curve, data), CONTEXT)?)
            }
            Slot::Twist(curve) => {
                Value::Twist(to_core_result(CurvePoint::hash_to_curve(curve, data), CONTEXT)?)
            }
            Slot::Quadratic(engine) => {
                let field = engine.target_field();
                let bytes = expand_message(data, 0, Fp2::encoded_len(field) + EXTRA_BYTES);
                let f = Fp2::from_uniform_bytes(field, &bytes);
                Value::Quadratic(to_core_result(engine.final_exponentiation(&f), CONTEXT)?)
            }
            Slot::Dodecic(engine) => {
                let field = engine.target_field();
                let bytes = expand_message(data, 0, Fp12::encoded_len(field) + EXTRA_BYTES);
                let f = Fp12::from_uniform_bytes(field, &bytes);
                Value::Dodecic(to_core_result(engine.final_exponentiation(&f), CONTEXT)?)
            }
        };
        Ok(Self::from_parts(pairing.clone(), group, value))
    }

    /// Decode the canonical encoding produced by [`Element::to_bytes`]
    pub fn from_bytes(pairing: &Pairing, group: GroupKind, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "Element::from_bytes";
        let value = match slot(pairing, group) {
            Slot::Scalar => {
                let expected = pairing.scalar_len();
                if bytes.len() != expected {
                    return Err(Error::InvalidLength {
                        context: CONTEXT,
                        expected,
                        actual: bytes.len(),
                    });
                }
                let v = BigInt::from_bytes_be(bytes);
                if &v >= pairing.order() {
                    return Err(Error::SerializationError {
                        context: CONTEXT,
                        message: "value is not below the group order".into(),
                    });
                }
                Value::Scalar(Scalar(v))
            }
            Slot::Base(curve) => {
                Value::Base(member(curve, CurvePoint::from_bytes(curve, bytes), CONTEXT)?)
            }
            Slot::Twist(curve) => {
                Value::Twist(member(curve, CurvePoint::from_bytes(curve, bytes), CONTEXT)?)
            }
            Slot::Quadratic(engine) => {
                let f = to_core_result(Fp2::from_bytes(engine.target_field(), bytes), CONTEXT)?;
                Value::Quadratic(target_member(f, engine.order(), CONTEXT)?)
            }
            Slot::Dodecic(engine) => {
                let f = to_core_result(Fp12::from_bytes(engine.target_field(), bytes), CONTEXT)?;
                Value::Dodecic(target_member(f, engine.order(), CONTEXT)?)
            }
        };
        Ok(Self::from_parts(pairing.clone(), group, value))
    }

    /// Decode a compressed G1 or G2 point
    pub fn from_bytes_compressed(pairing: &Pairing, group: GroupKind, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "Element::from_bytes_compressed";
        let value = match slot(pairing, group) {
            Slot::Base(curve) => Value::Base(member(
                curve,
                CurvePoint::from_bytes_compressed(curve, bytes),
                CONTEXT,
            )?),
            Slot::Twist(curve) => Value::Twist(member(
                curve,
                CurvePoint::from_bytes_compressed(curve, bytes),
                CONTEXT,
            )?),
            _ => return Err(not_a_curve_group(group, CONTEXT)),
        };
        Ok(Self::from_parts(pairing.clone(), group, value))
    }

    /// Decode a G1 or G2 point from its x-coordinate alone
    ///
    /// Of the two candidate points the one with an unsigned y is chosen, so
    /// a point and its negation decode to the same element.
    pub fn from_bytes_x_only(pairing: &Pairing, group: GroupKind, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "Element::from_bytes_x_only";
        let value = match slot(pairing, group) {
            Slot::Base(curve) => Value::Base(member(
                curve,
                CurvePoint::from_bytes_x_only(curve, bytes),
                CONTEXT,
            )?),
            Slot::Twist(curve) => Value::Twist(member(
                curve,
                CurvePoint::from_bytes_x_only(curve, bytes),
                CONTEXT,
            )?),
            _ => return Err(not_a_curve_group(group, CONTEXT)),
        };
        Ok(Self::from_parts(pairing.clone(), group, value))
    }
}

fn identity(pairing: &Pairing, group: GroupKind, one: bool) -> Value {
    match slot(pairing, group) {
        Slot::Scalar if one => Value::Scalar(Scalar(BigInt::one())),
        Slot::Scalar => Value::Scalar(Scalar(BigInt::zero())),
        Slot::Base(curve) => Value::Base(CurvePoint::identity(curve)),
        Slot::Twist(curve) => Value::Twist(CurvePoint::identity(curve)),
        Slot::Quadratic(engine) => Value::Quadratic(Fp2::one(engine.target_field())),
        Slot::Dodecic(engine) => Value::Dodecic(Fp12::one(engine.target_field())),
    }
}

/// Rejection sampling on the bit length of r
fn random_scalar<R: RngCore + CryptoRng>(pairing: &Pairing, rng: &mut R) -> Scalar {
    let r = pairing.order();
    let mut buf = vec![0u8; pairing.scalar_len()];
    let mask = 0xffu8 >> (buf.len() * 8 - r.bits());
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;
        let v = BigInt::from_bytes_be(&buf);
        if &v < r {
            buf.zeroize();
            return Scalar(v);
        }
    }
}

pub(crate) fn reduce(pairing: &Pairing, n: &BigInt, context: &'static str) -> Result<Scalar> {
    Ok(Scalar(to_core_result(n.modulo(pairing.order()), context)?))
}

/// Decoded points must also pass the subgroup check
fn member<F: FieldElement>(
    curve: &Arc<Curve<F>>,
    decoded: pbcrypt_algorithms::Result<CurvePoint<F>>,
    context: &'static str,
) -> Result<CurvePoint<F>> {
    let point = to_core_result(decoded, context)?;
    to_core_result(check_member(curve, &point, context), context)?;
    Ok(point)
}

fn target_member<F: FieldElement>(f: F, r: &BigInt, context: &'static str) -> Result<F> {
    if f.is_zero() || !f.pow(r).is_one() {
        return Err(Error::InvalidPoint {
            context,
            message: "value is not in the order-r subgroup of GT".into(),
        });
    }
    Ok(f)
}

fn not_a_curve_group(group: GroupKind, context: &'static str) -> Error {
    Error::InvalidParameter {
        context,
        message: format!("{} elements have no point encoding", group),
    }
}

// ============================================================================
// Encoding and queries
// ============================================================================

impl Element {
    /// The pairing this element belongs to
    pub fn pairing(&self) -> &Pairing {
        &self.pairing
    }

    /// The group this element belongs to
    pub fn group(&self) -> GroupKind {
        self.group
    }

    pub(crate) fn value(&self) -> &Value {
        &self.value
    }

    /// Canonical fixed-width encoding
    ///
    /// Z_r values are big-endian at the byte width of r, points use the
    /// tagged uncompressed form, and GT values concatenate their base field
    /// coefficients.
    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.value {
            Value::Scalar(s) => {
                let raw = s.0.to_bytes_be();
                let mut out = vec![0u8; self.pairing.scalar_len().saturating_sub(raw.len())];
                out.extend_from_slice(&raw);
                out
            }
            Value::Base(p) => p.to_bytes(),
            Value::Twist(p) => p.to_bytes(),
            Value::Quadratic(f) => f.to_bytes(),
            Value::Dodecic(f) => f.to_bytes(),
        }
    }

    /// Compressed encoding of a G1 or G2 point
    pub fn to_bytes_compressed(&self) -> Result<Vec<u8>> {
        match &self.value {
            Value::Base(p) => Ok(p.to_bytes_compressed()),
            Value::Twist(p) => Ok(p.to_bytes_compressed()),
            _ => Err(not_a_curve_group(self.group, "Element::to_bytes_compressed")),
        }
    }

    /// The x-coordinate of a non-identity G1 or G2 point
    pub fn to_bytes_x_only(&self) -> Result<Vec<u8>> {
        const CONTEXT: &str = "Element::to_bytes_x_only";
        match &self.value {
            Value::Base(p) => to_core_result(p.to_bytes_x_only(), CONTEXT),
            Value::Twist(p) => to_core_result(p.to_bytes_x_only(), CONTEXT),
            _ => Err(not_a_curve_group(self.group, CONTEXT)),
        }
    }

    /// True for zero in Z_r and for the identity elsewhere
    pub fn is0(&self) -> bool {
        match &self.value {
            Value::Scalar(s) => s.0.is_zero(),
            _ => self.is_identity(),
        }
    }

    /// True for one in Z_r and for the identity elsewhere
    pub fn is1(&self) -> bool {
        match &self.value {
            Value::Scalar(s) => s.0.is_one(),
            _ => self.is_identity(),
        }
    }

    fn is_identity(&self) -> bool {
        match &self.value {
            Value::Scalar(s) => s.0.is_zero(),
            Value::Base(p) => p.is_identity(),
            Value::Twist(p) => p.is_identity(),
            Value::Quadratic(f) => f.is_one(),
            Value::Dodecic(f) => f.is_one(),
        }
    }

    /// Order of the element's group, r for all four
    pub fn order(&self) -> &BigInt {
        self.pairing.order()
    }

    /// Number of components: 2 coordinates for points, the `Fp2`
    /// coefficients for GT
    pub fn len(&self) -> Result<usize> {
        match &self.value {
            Value::Scalar(_) => Err(Error::InvalidParameter {
                context: "Element::len",
                message: "Zr elements are not dimensioned".into(),
            }),
            Value::Base(_) | Value::Twist(_) | Value::Quadratic(_) => Ok(2),
            Value::Dodecic(_) => Ok(6),
        }
    }

    /// Prime field coefficients of component `i`
    ///
    /// A G1 coordinate is one integer, a twist coordinate or a type F GT
    /// coefficient is two, and a type A GT coefficient is one.
    pub fn item(&self, i: usize) -> Result<Vec<BigInt>> {
        const CONTEXT: &str = "Element::item";
        let len = self.len().map_err(|e| e.with_context(CONTEXT))?;
        if i >= len {
            return Err(Error::InvalidParameter {
                context: CONTEXT,
                message: format!("index {} out of range for {} components", i, len),
            });
        }
        let no_coordinates = || Error::InvalidParameter {
            context: CONTEXT,
            message: "the identity has no coordinates".into(),
        };
        let item = match &self.value {
            Value::Base(p) => {
                let (x, y) = p.coordinates().ok_or_else(no_coordinates)?;
                let c = if i == 0 { x } else { y };
                vec![c.to_bigint()]
            }
            Value::Twist(p) => {
                let (x, y) = p.coordinates().ok_or_else(no_coordinates)?;
                let c = if i == 0 { x } else { y };
                vec![c.c0().to_bigint(), c.c1().to_bigint()]
            }
            Value::Quadratic(f) => {
                let c = if i == 0 { f.c0() } else { f.c1() };
                vec![c.to_bigint()]
            }
            Value::Dodecic(f) => {
                let c = &f.to_w_coefficients()[i];
                vec![c.c0().to_bigint(), c.c1().to_bigint()]
            }
            // rejected by len above
            Value::Scalar(_) => Vec::new(),
        };
        Ok(item)
    }

    /// The integer in `[0, r)` held by a Z_r element
    pub fn to_bigint(&self) -> Result<BigInt> {
        match &self.value {
            Value::Scalar(s) => Ok(s.0.clone()),
            _ => Err(Error::InvalidParameter {
                context: "Element::to_bigint",
                message: format!("cannot convert a {} element to an integer", self.group),
            }),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.value == other.value && self.pairing == other.pairing
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::Scalar(s) => write!(f, "{}", s.0),
            Value::Base(p) => write!(f, "{}", p),
            Value::Twist(p) => write!(f, "{}", p),
            Value::Quadratic(v) => write!(f, "{:?}", v),
            Value::Dodecic(v) => write!(f, "{:?}", v),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({}, {})", self.group, self)
    }
}

impl Serialize for Element {
    type Context = (Pairing, GroupKind);

    fn from_bytes(ctx: &Self::Context, bytes: &[u8]) -> Result<Self> {
        Element::from_bytes(&ctx.0, ctx.1, bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Element::to_bytes(self)
    }
}

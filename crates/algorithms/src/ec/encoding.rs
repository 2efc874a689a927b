//! Fixed-width point encodings
//!
//! With `n` the encoded width of one coordinate:
//!
//! - uncompressed: `0x04 || x || y`, `1 + 2n` bytes
//! - compressed: `0x02 | 0x03 || x`, `1 + n` bytes, `0x03` when `y` is signed
//! - x-only: `x`, `n` bytes, decoding to the root with the unsigned `y`
//!
//! The identity encodes as all zeros in the first two forms and has no
//! x-only form.

use std::sync::Arc;

use pbcrypt_api::{Result as CoreResult, Serialize};

use super::point::check_decoded;
use super::{Curve, CurvePoint};
use crate::error::{to_core_result, validate, Error, Result};
use crate::field::{FieldElement, SqrtField};

/// Format of a serialized point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity
    Identity,
    /// `0x04 || x || y`
    Uncompressed,
    /// `0x02/0x03 || x`
    Compressed,
}

const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_EVEN: u8 = 0x02;
const TAG_ODD: u8 = 0x03;

impl PointFormat {
    /// Classify an encoding by its tag byte
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        let tag = bytes
            .first()
            .ok_or_else(|| Error::encoding("PointFormat::detect", "empty input"))?;
        match *tag {
            0x00 => Ok(Self::Identity),
            TAG_UNCOMPRESSED => Ok(Self::Uncompressed),
            TAG_EVEN | TAG_ODD => Ok(Self::Compressed),
            other => Err(Error::encoding(
                "PointFormat::detect",
                format!("unknown point tag {:#04x}", other),
            )),
        }
    }
}

fn coordinate_len<F: FieldElement>(curve: &Curve<F>) -> usize {
    F::encoded_len(curve.field())
}

fn check_identity_padding(bytes: &[u8], context: &'static str) -> Result<()> {
    if bytes.iter().any(|&b| b != 0) {
        return Err(Error::encoding(context, "identity encoding must be all zeros"));
    }
    Ok(())
}

impl<F: FieldElement> CurvePoint<F> {
    /// Width of the uncompressed encoding
    pub fn encoded_len(curve: &Curve<F>) -> usize {
        1 + 2 * coordinate_len(curve)
    }

    /// Uncompressed encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let n = coordinate_len(self.curve());
        match self.coordinates() {
            None => vec![0u8; 1 + 2 * n],
            Some((x, y)) => {
                let mut out = Vec::with_capacity(1 + 2 * n);
                out.push(TAG_UNCOMPRESSED);
                out.extend_from_slice(&x.to_bytes());
                out.extend_from_slice(&y.to_bytes());
                out
            }
        }
    }

    /// Decode the uncompressed form, checking the curve equation
    pub fn from_bytes(curve: &Arc<Curve<F>>, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "CurvePoint::from_bytes";
        validate::length(CONTEXT, bytes.len(), Self::encoded_len(curve))?;
        match PointFormat::detect(bytes)? {
            PointFormat::Identity => {
                check_identity_padding(bytes, CONTEXT)?;
                Ok(Self::identity(curve))
            }
            PointFormat::Uncompressed => {
                let n = coordinate_len(curve);
                let x = F::from_bytes(curve.field(), &bytes[1..1 + n])?;
                let y = F::from_bytes(curve.field(), &bytes[1 + n..])?;
                check_decoded(curve, x, y, CONTEXT)
            }
            PointFormat::Compressed => Err(Error::encoding(
                CONTEXT,
                "expected an uncompressed point",
            )),
        }
    }

    /// Width of the compressed encoding
    pub fn compressed_len(curve: &Curve<F>) -> usize {
        1 + coordinate_len(curve)
    }

    /// Width of the x-only encoding
    pub fn x_only_len(curve: &Curve<F>) -> usize {
        coordinate_len(curve)
    }

    /// x-only encoding; the identity has none
    pub fn to_bytes_x_only(&self) -> Result<Vec<u8>> {
        match self.x() {
            Some(x) => Ok(x.to_bytes()),
            None => Err(Error::encoding(
                "CurvePoint::to_bytes_x_only",
                "the identity has no x-only encoding",
            )),
        }
    }
}

impl<F: SqrtField> CurvePoint<F> {
    /// Compressed encoding
    pub fn to_bytes_compressed(&self) -> Vec<u8> {
        let n = coordinate_len(self.curve());
        match self.coordinates() {
            None => vec![0u8; 1 + n],
            Some((x, y)) => {
                let mut out = Vec::with_capacity(1 + n);
                out.push(if y.sign() { TAG_ODD } else { TAG_EVEN });
                out.extend_from_slice(&x.to_bytes());
                out
            }
        }
    }

    /// Decode the compressed form
    ///
    /// An `x` with no point above it fails with `PointNotOnCurve`; the odd
    /// tag on a point with `y = 0` is not canonical and fails with `Encoding`.
    pub fn from_bytes_compressed(curve: &Arc<Curve<F>>, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "CurvePoint::from_bytes_compressed";
        validate::length(CONTEXT, bytes.len(), Self::compressed_len(curve))?;
        match PointFormat::detect(bytes)? {
            PointFormat::Identity => {
                check_identity_padding(bytes, CONTEXT)?;
                Ok(Self::identity(curve))
            }
            PointFormat::Compressed => {
                let x = F::from_bytes(curve.field(), &bytes[1..])?;
                let odd = bytes[0] == TAG_ODD;
                let point = Self::lift_x(curve, x, odd, CONTEXT)?;
                // y = 0 only has the even tag
                if odd && point.coordinates().map_or(false, |(_, y)| y.is_zero()) {
                    return Err(Error::encoding(CONTEXT, "odd tag on a point with y = 0"));
                }
                Ok(point)
            }
            PointFormat::Uncompressed => {
                Err(Error::encoding(CONTEXT, "expected a compressed point"))
            }
        }
    }

    /// Decode the x-only form, choosing the unsigned `y`
    pub fn from_bytes_x_only(curve: &Arc<Curve<F>>, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "CurvePoint::from_bytes_x_only";
        validate::length(CONTEXT, bytes.len(), Self::x_only_len(curve))?;
        let x = F::from_bytes(curve.field(), bytes)?;
        Self::lift_x(curve, x, false, CONTEXT)
    }

    fn lift_x(curve: &Arc<Curve<F>>, x: F, sign: bool, context: &'static str) -> Result<Self> {
        Self::from_x(curve, x, sign).map_err(|e| match e {
            Error::NotASquare { .. } => Error::PointNotOnCurve { context },
            other => other,
        })
    }
}

impl<F: FieldElement> Serialize for CurvePoint<F> {
    type Context = Arc<Curve<F>>;

    fn from_bytes(ctx: &Self::Context, bytes: &[u8]) -> CoreResult<Self> {
        to_core_result(CurvePoint::from_bytes(ctx, bytes), "CurvePoint")
    }

    fn to_bytes(&self) -> Vec<u8> {
        CurvePoint::to_bytes(self)
    }
}

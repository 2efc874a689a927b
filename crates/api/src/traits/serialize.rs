//! Traits for fixed-width byte serialization of algebraic values.

use crate::Result;

/// A trait for values whose byte encoding only makes sense relative to some
/// context, such as the field or curve they live in.
///
/// Implementations must round-trip exactly: `from_bytes(ctx, &x.to_bytes())`
/// yields a value equal to `x`.
pub trait Serialize: Sized {
    /// Whatever is needed to interpret the bytes
    type Context;

    /// Creates an object from a byte slice.
    fn from_bytes(ctx: &Self::Context, bytes: &[u8]) -> Result<Self>;

    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}

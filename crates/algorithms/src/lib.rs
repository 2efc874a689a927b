//! Arithmetic core of the pbcrypt pairing library
//!
//! The layers build on each other from the bottom up:
//!
//! - [`bigint`]: arbitrary-precision signed integers
//! - [`field`]: prime fields and the `Fp2`, `Fp6`, `Fp12` towers
//! - [`ec`]: short Weierstrass curves written once over any field
//! - [`pairing`]: Miller loops and final exponentiations
//! - [`params`]: parameter text parsing, validation and engine construction
//!
//! Every descriptor (field, curve, engine) is immutable and shared through
//! `Arc`, so values can move freely between threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod bigint;
pub use bigint::BigInt;

pub mod field;
pub use field::{
    FieldElement, Fp, Fp12, Fp12Field, Fp2, Fp2Field, Fp6, Fp6Field, PrimeField, SqrtField,
};

pub mod ec;
pub use ec::{Curve, CurvePoint, PointFormat};

pub mod pairing;
pub use pairing::{PairingEngine, TypeAPairing, TypeFPairing};

pub mod params;
pub use params::{load_parameters, Description, PairingParameters, TypeAParams, TypeFParams};

//! # pbcrypt
//!
//! Pairing-based cryptography in pure Rust: arbitrary-precision integers,
//! prime and extension field towers, elliptic-curve groups, and bilinear
//! pairings loaded from PBC-style parameter text.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pbcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `group` (default): the [`Pairing`] / [`Element`] API
//! - `serde`: `Serialize`/`Deserialize` for the numeric parameter structs
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pbcrypt-api`]: error type and serialization trait
//! - [`pbcrypt-algorithms`]: big integers, fields, curves, pairings, loader
//! - [`pbcrypt-params`]: preset parameter texts
//! - [`pbcrypt-group`]: group elements bound to a loaded pairing
//!
//! ```no_run
//! use pbcrypt::prelude::*;
//!
//! let pairing = Pairing::new(pbcrypt::params::TYPE_A_512)?;
//! let mut rng = rand::thread_rng();
//! let g = Element::random(&pairing, GroupKind::G2, &mut rng);
//! let x = Element::random(&pairing, GroupKind::Zr, &mut rng);
//! let h = Element::from_hash(&pairing, GroupKind::G1, b"message")?;
//! let sigma = h.pow_zn(&x)?;
//! assert_eq!(
//!     pairing.apply(&sigma, &g)?,
//!     pairing.apply(&h, &g.pow_zn(&x)?)?
//! );
//! # Ok::<(), pbcrypt::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use pbcrypt_algorithms as algorithms;
pub use pbcrypt_api as api;
pub use pbcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "group")]
pub use pbcrypt_group as group;

#[cfg(feature = "group")]
pub use pbcrypt_group::{Element, Pairing};

/// Common imports for pbcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, GroupKind, Result, ResultExt, Serialize};

    // Arithmetic layers
    pub use crate::algorithms::{
        load_parameters, BigInt, Curve, CurvePoint, FieldElement, PairingEngine,
        PairingParameters, SqrtField,
    };

    #[cfg(feature = "group")]
    pub use crate::group::{Element, Pairing};
}

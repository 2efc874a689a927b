//! Loading pairing parameters from PBC-style text
//!
//! [`load_parameters`] parses a [`Description`], reads the numeric fields of
//! the announced type, validates them and builds the matching engine. Every
//! failure surfaces as `MalformedParameter`.

use core::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::bigint::BigInt;
use crate::ec::Curve;
use crate::error::{Error, Result};
use crate::field::Fp;
use crate::pairing::{PairingEngine, TypeAPairing, TypeFPairing};

mod description;
mod type_a;
mod type_f;


pub use description::Description;
pub use type_a::{TypeAParams, TYPE_A_KEYS};
pub use type_f::{TypeFParams, TYPE_F_KEYS};

/// A validated parameter set together with its pairing engine
#[derive(Clone, Debug)]
pub enum PairingParameters {
    /// Symmetric Tate pairing on `y² = x³ + x`
    TypeA {
        /// Numeric parameters
        params: TypeAParams,
        /// Engine built from them
        engine: Arc<TypeAPairing>,
    },
    /// Ate pairing on a BN curve
    TypeF {
        /// Numeric parameters
        params: TypeFParams,
        /// Engine built from them
        engine: Arc<TypeFPairing>,
    },
}

impl PairingParameters {
    /// `"a"` or `"f"`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TypeA { .. } => "a",
            Self::TypeF { .. } => "f",
        }
    }

    /// The curve carrying G1, over `F_q` for both types
    pub fn g1_curve(&self) -> &Arc<Curve<Fp>> {
        match self {
            Self::TypeA { engine, .. } => engine.g1_curve(),
            Self::TypeF { engine, .. } => engine.g1_curve(),
        }
    }

    /// Prime group order r
    pub fn order(&self) -> &BigInt {
        match self {
            Self::TypeA { engine, .. } => engine.order(),
            Self::TypeF { engine, .. } => engine.order(),
        }
    }

    /// Embedding degree k
    pub fn embedding_degree(&self) -> u32 {
        match self {
            Self::TypeA { engine, .. } => engine.embedding_degree(),
            Self::TypeF { engine, .. } => engine.embedding_degree(),
        }
    }

    /// True when G1 = G2
    pub fn is_symmetric(&self) -> bool {
        match self {
            Self::TypeA { engine, .. } => engine.is_symmetric(),
            Self::TypeF { engine, .. } => engine.is_symmetric(),
        }
    }

    /// The type A engine, if this is a type A set
    pub fn as_type_a(&self) -> Option<&Arc<TypeAPairing>> {
        match self {
            Self::TypeA { engine, .. } => Some(engine),
            Self::TypeF { .. } => None,
        }
    }

    /// The type F engine, if this is a type F set
    pub fn as_type_f(&self) -> Option<&Arc<TypeFPairing>> {
        match self {
            Self::TypeF { engine, .. } => Some(engine),
            Self::TypeA { .. } => None,
        }
    }

    /// Canonical description of this parameter set
    pub fn description(&self) -> Description {
        match self {
            Self::TypeA { params, .. } => params.to_description(),
            Self::TypeF { params, .. } => params.to_description(),
        }
    }
}

impl fmt::Display for PairingParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.description(), f)
    }
}

impl TryFrom<TypeAParams> for PairingParameters {
    type Error = Error;

    fn try_from(params: TypeAParams) -> Result<Self> {
        let engine = Arc::new(params.validate()?);
        Ok(Self::TypeA { params, engine })
    }
}

impl TryFrom<TypeFParams> for PairingParameters {
    type Error = Error;

    fn try_from(params: TypeFParams) -> Result<Self> {
        let engine = Arc::new(params.validate()?);
        Ok(Self::TypeF { params, engine })
    }
}

/// Parse, validate and build a pairing from parameter text
pub fn load_parameters(text: &str) -> Result<PairingParameters> {
    let loaded = load_description(text);
    match &loaded {
        Ok(p) => info!(
            kind = p.kind(),
            q_bits = p.g1_curve().field().modulus().bits(),
            r_bits = p.order().bits(),
            "loaded pairing parameters"
        ),
        Err(e) => warn!(error = %e, "rejected pairing parameters"),
    }
    loaded
}

fn load_description(text: &str) -> Result<PairingParameters> {
    let desc = Description::parse(text)?;
    let known: &[&str] = match desc.kind() {
        "a" => &TYPE_A_KEYS,
        "f" => &TYPE_F_KEYS,
        other => {
            return Err(Error::malformed(
                "type",
                format!("unsupported pairing type '{}'", other),
            ))
        }
    };
    for key in desc.unknown_keys(known) {
        debug!(key, "ignoring unknown parameter key");
    }
    match desc.kind() {
        "a" => TypeAParams::from_description(&desc)?.try_into(),
        _ => TypeFParams::from_description(&desc)?.try_into(),
    }
}

/// Re-tag an arithmetic failure as a malformed parameter under `key`
pub(crate) fn malformed_from(key: &'static str) -> impl Fn(Error) -> Error {
    move |e| match e {
        Error::MalformedParameter { .. } => e,
        other => Error::malformed(key, other.to_string()),
    }
}

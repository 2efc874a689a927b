//! Shared handle to a loaded pairing

use core::fmt;
use std::sync::Arc;

use pbcrypt_algorithms::error::to_core_result;
use pbcrypt_algorithms::{load_parameters, BigInt, PairingEngine, PairingParameters};
use pbcrypt_api::{Error, GroupKind, Result};
use tracing::trace_span;

use crate::element::{Element, Value};

/// A validated pairing, cheap to clone and safe to share across threads
#[derive(Clone, Debug)]
pub struct Pairing {
    params: Arc<PairingParameters>,
}

impl Pairing {
    /// Load a pairing from PBC-style parameter text
    pub fn new(text: &str) -> Result<Self> {
        let params = to_core_result(load_parameters(text), "Pairing::new")?;
        Ok(Self::from_parameters(params))
    }

    /// Wrap an already validated parameter set
    pub fn from_parameters(params: PairingParameters) -> Self {
        Self {
            params: Arc::new(params),
        }
    }

    /// The underlying parameter set and engine
    pub fn parameters(&self) -> &PairingParameters {
        &self.params
    }

    /// Prime order r shared by G1, G2, GT and the modulus of Z_r
    pub fn order(&self) -> &BigInt {
        self.params.order()
    }

    /// True when G1 and G2 are the same group
    pub fn is_symmetric(&self) -> bool {
        self.params.is_symmetric()
    }

    /// Byte width of a Z_r encoding
    pub(crate) fn scalar_len(&self) -> usize {
        (self.order().bits() + 7) / 8
    }

    /// `e(a, b)` for one argument in G1 and the other in G2
    ///
    /// The arguments may come in either order. Anything else, including two
    /// G1 elements of a symmetric pairing, fails with `GroupMismatch`.
    pub fn apply(&self, a: &Element, b: &Element) -> Result<Element> {
        for e in [a, b] {
            if e.pairing() != self {
                return Err(Error::group_mismatch(
                    "Pairing::apply",
                    "element belongs to a different pairing",
                ));
            }
        }
        let (g1, g2) = match (a.group(), b.group()) {
            (GroupKind::G1, GroupKind::G2) => (a, b),
            (GroupKind::G2, GroupKind::G1) => (b, a),
            (x, y) => {
                return Err(Error::group_mismatch(
                    "Pairing::apply",
                    format!("expected one G1 and one G2 element, got {} and {}", x, y),
                ))
            }
        };
        let _span = trace_span!("apply", kind = self.params.kind()).entered();
        let value = match (&*self.params, g1.value(), g2.value()) {
            (PairingParameters::TypeA { engine, .. }, Value::Base(p), Value::Base(q)) => {
                Value::Quadratic(to_core_result(engine.pair(p, q), "Pairing::apply")?)
            }
            (PairingParameters::TypeF { engine, .. }, Value::Base(p), Value::Twist(q)) => {
                Value::Dodecic(to_core_result(engine.pair(p, q), "Pairing::apply")?)
            }
            _ => {
                return Err(Error::group_mismatch(
                    "Pairing::apply",
                    "element representation does not match the pairing type",
                ))
            }
        };
        Ok(Element::from_parts(self.clone(), GroupKind::GT, value))
    }
}

impl PartialEq for Pairing {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.params, &other.params)
            || self.params.description() == other.params.description()
    }
}

impl Eq for Pairing {}

/// Renders the canonical parameter text, which [`Pairing::new`] accepts
impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.params, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbcrypt_params::{TYPE_A_TOY, TYPE_F_TOY};

    #[test]
    fn test_new_and_queries() {
        let a = Pairing::new(TYPE_A_TOY).unwrap();
        assert!(a.is_symmetric());
        assert_eq!(a.order(), &BigInt::from_u64(13));
        assert_eq!(a.scalar_len(), 1);
        assert_eq!(a.parameters().kind(), "a");

        let f = Pairing::new(TYPE_F_TOY).unwrap();
        assert!(!f.is_symmetric());
        assert_eq!(f.order(), &BigInt::from_u64(97));
    }

    #[test]
    fn test_malformed_text() {
        let err = Pairing::new("type a\nq 103\n").unwrap_err();
        assert!(matches!(err, Error::MalformedParameter { .. }));
        assert_eq!(err.context(), "Pairing::new");
    }

    #[test]
    fn test_equality_and_display() {
        let a = Pairing::new(TYPE_A_TOY).unwrap();
        let b = Pairing::new(&a.to_string()).unwrap();
        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_ne!(a, Pairing::new(TYPE_F_TOY).unwrap());
    }
}

//! Shared helpers for the pbcrypt integration tests
//!
//! Known-answer vectors live in `vectors/*.toml` and are read through
//! [`vectors`]. Tests that want log output call [`setup_tracing`] and run with
//! `RUST_LOG=debug`.

pub mod vectors;

use pbcrypt_algorithms::BigInt;
use pbcrypt_api::GroupKind;
use pbcrypt_group::{Element, Pairing};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber filtered by `RUST_LOG`; safe to call
/// from every test
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Look up a preset from `pbcrypt_params::ALL` by its short name
pub fn preset(name: &str) -> &'static str {
    pbcrypt_params::ALL
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, text)| *text)
        .unwrap_or_else(|| panic!("unknown preset {}", name))
}

/// Load a preset as a [`Pairing`]
pub fn pairing(name: &str) -> Pairing {
    Pairing::new(preset(name)).unwrap_or_else(|e| panic!("preset {} failed: {}", name, e))
}

/// Parse decimal strings from a vector file
pub fn integers(values: &[String]) -> Vec<BigInt> {
    values
        .iter()
        .map(|v| v.parse().unwrap_or_else(|e| panic!("bad integer {}: {}", v, e)))
        .collect()
}

/// Build a G1 or G2 element from its prime field coefficients
///
/// An empty coefficient list is the identity.
pub fn point(pairing: &Pairing, group: GroupKind, coefficients: &[String]) -> Element {
    if coefficients.is_empty() {
        return Element::zero(pairing, group);
    }
    let width = pairing.parameters().g1_curve().field().byte_len();
    let mut bytes = vec![0x04];
    for c in integers(coefficients) {
        bytes.extend(c.to_bytes_be_padded(width).expect("coefficient fits the field"));
    }
    Element::from_bytes(pairing, group, &bytes)
        .unwrap_or_else(|e| panic!("vector point rejected: {}", e))
}

/// Flatten the `item` coefficients of an element
pub fn coefficients(element: &Element) -> Vec<BigInt> {
    let len = element.len().expect("dimensioned element");
    (0..len)
        .flat_map(|i| element.item(i).expect("component"))
        .collect()
}

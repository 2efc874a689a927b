//! Group element API over a loaded pairing
//!
//! This crate is the boundary a host binding talks to. A [`Pairing`] wraps a
//! validated parameter set; an [`Element`] is a value in one of its four
//! groups (G1, G2, GT or Z_r) and carries its pairing along, so operations
//! never need a separate context argument. All failures are reported as
//! [`pbcrypt_api::Error`].

#![forbid(unsafe_code)]

pub mod element;
pub mod pairing;

pub use element::Element;
pub use pairing::Pairing;
pub use pbcrypt_api::{Error, GroupKind, Result};

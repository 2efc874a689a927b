//! Preset parameter texts for the pbcrypt library
//!
//! Each constant is PBC-style `key value` text ready for
//! `pbcrypt_algorithms::load_parameters`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod type_a;
pub mod type_f;

pub use type_a::{TYPE_A_512, TYPE_A_TOY};
pub use type_f::{TYPE_F_BN254, TYPE_F_TOY};

/// Every preset with a short name, smallest first within each type
pub const ALL: [(&str, &str); 4] = [
    ("a-toy", TYPE_A_TOY),
    ("a-512", TYPE_A_512),
    ("f-toy", TYPE_F_TOY),
    ("f-bn254", TYPE_F_BN254),
];

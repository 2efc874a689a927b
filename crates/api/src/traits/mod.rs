//! Trait definitions shared across pbcrypt crates

pub mod serialize;

pub use serialize::Serialize;

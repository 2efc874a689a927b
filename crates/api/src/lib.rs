//! Public API traits and types for the pbcrypt library
//!
//! This crate provides the public API surface shared by every pbcrypt crate:
//! the host-facing error type, the byte serialization trait, and the group
//! tags used by the element API.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::GroupKind;

// Re-export all traits from the traits module
pub use traits::Serialize;

// Re-export trait modules for direct access
pub use traits::serialize;

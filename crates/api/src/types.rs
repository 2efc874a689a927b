//! Group tags shared by the element API

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which group of a pairing an element belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// Points on the base curve
    G1,
    /// Points on the second source group (the twist for asymmetric pairings)
    G2,
    /// Target group, written multiplicatively
    GT,
    /// Integers modulo the group order
    Zr,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::G1 => "G1",
            GroupKind::G2 => "G2",
            GroupKind::GT => "GT",
            GroupKind::Zr => "Zr",
        };
        f.write_str(name)
    }
}

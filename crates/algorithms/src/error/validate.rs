//! Validation utilities for arithmetic inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate one consistency check of a parameter set
#[inline(always)]
pub fn well_formed(condition: bool, key: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::malformed(key, reason));
    }
    Ok(())
}

/// Validate that a point satisfies its curve equation
#[inline(always)]
pub fn on_curve(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::PointNotOnCurve { context });
    }
    Ok(())
}

/// Validate one step of a pairing membership check
#[inline(always)]
pub fn member(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPoint { context, reason });
    }
    Ok(())
}

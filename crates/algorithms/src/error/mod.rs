//! Error handling for the arithmetic layers

use std::borrow::Cow;
use std::fmt;

use pbcrypt_api::{Error as CoreError, Result as CoreResult};

/// The error type for big-integer, field, curve, and pairing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Curve parameter text is missing, inconsistent, or fails a check
    MalformedParameter {
        /// Offending key, or the check that failed
        key: Cow<'static, str>,
        /// What is wrong with it
        reason: Cow<'static, str>,
    },

    /// Coordinates do not satisfy the curve equation
    PointNotOnCurve {
        /// Operation that built the point
        context: &'static str,
    },

    /// Pairing input rejected by the membership check
    InvalidPoint {
        /// Operation that ran the check
        context: &'static str,
        /// Which part of the check failed
        reason: &'static str,
    },

    /// Inversion of zero, or of a value sharing a factor with the modulus
    NoInverse {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Square root of a non-residue
    NotASquare {
        /// Operation that attempted the square root
        context: &'static str,
    },

    /// Bytes or text that do not decode to a canonical value
    Encoding {
        /// Decoder that rejected the input
        context: &'static str,
        /// Additional details
        details: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a MalformedParameter error
    pub fn malformed<K: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        key: K,
        reason: R,
    ) -> Self {
        Error::MalformedParameter {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }
}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::MalformedParameter { key, reason } => {
                write!(f, "Malformed parameter '{}': {}", key, reason)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point not on curve in {}", context)
            }
            Error::InvalidPoint { context, reason } => {
                write!(f, "Invalid point in {}: {}", context, reason)
            }
            Error::NoInverse { context } => write!(f, "No inverse in {}", context),
            Error::NotASquare { context } => write!(f, "Not a square in {}", context),
            Error::Encoding { context, details } => {
                write!(f, "Encoding error in {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::MalformedParameter { key, reason } => CoreError::MalformedParameter {
                context: "load_parameters",
                message: format!("{}: {}", key, reason),
            },
            Error::PointNotOnCurve { context } => CoreError::PointNotOnCurve {
                context,
                message: "coordinates do not satisfy the curve equation".to_string(),
            },
            Error::InvalidPoint { context, reason } => CoreError::InvalidPoint {
                context,
                message: reason.to_string(),
            },
            Error::NoInverse { context } => CoreError::NoInverse {
                context,
                message: "value is not invertible".to_string(),
            },
            Error::NotASquare { context } => CoreError::NotASquare {
                context,
                message: "value is a non-residue".to_string(),
            },
            Error::Encoding { context, details } => CoreError::SerializationError {
                context,
                message: details.into_owned(),
            },
        }
    }
}

/// Convert an arithmetic result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use pbcrypt_api::error::ResultExt;

// Include the validation submodule
pub mod validate;

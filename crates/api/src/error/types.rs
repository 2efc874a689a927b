//! Error type definitions for pairing operations

use thiserror::Error as ThisError;

/// Primary error type reported across the pbcrypt boundary
///
/// Every variant carries a static `context` naming the operation that failed
/// and a free-form `message` with the details.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter text could not be parsed or failed validation
    #[error("malformed parameters: {context}: {message}")]
    MalformedParameter {
        context: &'static str,
        message: String,
    },

    /// Coordinates do not satisfy the curve equation
    #[error("point not on curve: {context}: {message}")]
    PointNotOnCurve {
        context: &'static str,
        message: String,
    },

    /// Pairing input failed the group membership check
    #[error("invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Inversion of a non-invertible value
    #[error("no inverse: {context}: {message}")]
    NoInverse {
        context: &'static str,
        message: String,
    },

    /// Square root of a non-residue
    #[error("not a square: {context}: {message}")]
    NotASquare {
        context: &'static str,
        message: String,
    },

    /// Operands belong to different groups or pairings
    #[error("group mismatch: {context}: {message}")]
    GroupMismatch {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Byte or string encoding could not be decoded
    #[error("serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Invalid argument that fits no other category
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for pairing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::MalformedParameter { message, .. } => Self::MalformedParameter { context, message },
            Self::PointNotOnCurve { message, .. } => Self::PointNotOnCurve { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::NoInverse { message, .. } => Self::NoInverse { context, message },
            Self::NotASquare { message, .. } => Self::NotASquare { context, message },
            Self::GroupMismatch { message, .. } => Self::GroupMismatch { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SerializationError { message, .. } => Self::SerializationError { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::MalformedParameter { context, .. } => Self::MalformedParameter { context, message },
            Self::PointNotOnCurve { context, .. } => Self::PointNotOnCurve { context, message },
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::NoInverse { context, .. } => Self::NoInverse { context, message },
            Self::NotASquare { context, .. } => Self::NotASquare { context, message },
            Self::GroupMismatch { context, .. } => Self::GroupMismatch { context, message },
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SerializationError { context, .. } => Self::SerializationError { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Shorthand for a group mismatch
    pub fn group_mismatch(context: &'static str, message: impl Into<String>) -> Self {
        Self::GroupMismatch {
            context,
            message: message.into(),
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::MalformedParameter { context, .. }
            | Self::PointNotOnCurve { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::NoInverse { context, .. }
            | Self::NotASquare { context, .. }
            | Self::GroupMismatch { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::SerializationError { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}

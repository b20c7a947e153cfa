//! Error type definitions for mode-of-operation calls

#[cfg(feature = "std")]
use std::string::{String, ToString};

/// Primary error type for modecrypt operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The direction selector was neither encrypt nor decrypt
    InvalidDirection {
        /// Where the selector was rejected
        context: &'static str,
        /// What was supplied
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// What was being sized
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Name of the offending parameter
        context: &'static str,
        /// Why it was rejected
        #[cfg(feature = "std")]
        message: String,
    },

    /// The block primitive reported a failure
    Primitive {
        /// Primitive or operation that failed
        context: &'static str,
        /// Failure details from the primitive
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for modecrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidDirection`]
    #[allow(unused_variables)]
    pub fn invalid_direction(context: &'static str, message: &str) -> Self {
        Self::InvalidDirection {
            context,
            #[cfg(feature = "std")]
            message: message.to_string(),
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    #[allow(unused_variables)]
    pub fn param(context: &'static str, message: &str) -> Self {
        Self::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: message.to_string(),
        }
    }

    /// Shorthand for an [`Error::Primitive`]
    #[allow(unused_variables)]
    pub fn primitive(context: &'static str, message: &str) -> Self {
        Self::Primitive {
            context,
            #[cfg(feature = "std")]
            message: message.to_string(),
        }
    }

    /// Returns the context string carried by every variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidDirection { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Primitive { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidDirection {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidDirection {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::Primitive {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::Primitive {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// Whether this is an [`Error::InvalidDirection`]
    pub fn is_invalid_direction(&self) -> bool {
        matches!(self, Self::InvalidDirection { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidDirection { context, message } => {
                write!(f, "{}: invalid direction ({})", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidDirection { context } => {
                write!(f, "{}: invalid direction", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Primitive { context, message } => {
                write!(f, "Block primitive failed: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Primitive { context } => {
                write!(f, "Block primitive failed: {}", context)
            }
        }
    }
}

//! Error handling for curve arithmetic

use std::borrow::Cow;
use std::fmt;

use dhec_api::Error as CoreError;

/// The error type for curve arithmetic and scalar generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// An inversion was attempted on an element with no inverse
    ArithmeticUndefined {
        /// Operation that needed the inverse
        operation: &'static str,
    },

    /// The random generator failed or produced unusable output
    Randomness {
        /// Which generator failed
        source: &'static str,
        /// Detailed error message
        details: String,
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

    /// Shorthand to create a Randomness error
    pub fn randomness(source: &'static str, details: impl Into<String>) -> Self {
        Error::Randomness {
            source,
            details: details.into(),
        }
    }
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::ArithmeticUndefined { operation } => {
                write!(f, "Arithmetic undefined in {}", operation)
            }
            Error::Randomness { source, details } => {
                write!(f, "Random generation failed in {}: {}", source, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "curve arithmetic",
                },
                message: reason.into_owned(),
            },
            Error::ArithmeticUndefined { operation } => {
                CoreError::ArithmeticUndefined { context: operation }
            }
            Error::Randomness { source, details } => CoreError::RandomnessFailure {
                context: source,
                message: details,
            },
        }
    }
}

/// Convert a primitive result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> dhec_api::Result<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;

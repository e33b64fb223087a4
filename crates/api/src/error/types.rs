//! Error type definitions for key exchange operations

use std::io;
use thiserror::Error;

/// Primary error type for key exchange operations
#[derive(Debug, Error)]
pub enum Error {
    /// The external random generator failed or returned malformed output
    #[error("Randomness failure in {context}: {message}")]
    RandomnessFailure {
        context: &'static str,
        message: String,
    },

    /// Connect, listen, read or write failed
    #[error("Transport failure in {context}: {source}")]
    TransportFailure {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// A framed message or its payload was malformed or truncated
    #[error("Serialization failure in {context}: {message}")]
    SerializationFailure {
        context: &'static str,
        message: String,
    },

    /// A field element with no inverse reached an inversion.
    ///
    /// The group law handles the identity and 2-torsion cases before
    /// inverting, so this signals a broken internal invariant.
    #[error("Arithmetic undefined in {context}")]
    ArithmeticUndefined { context: &'static str },

    /// Invalid parameter or configuration value
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A point that cannot take part in the exchange
    #[error("Invalid point in {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// A session operation was called out of order
    #[error("Protocol error in {context}: {message}")]
    Protocol {
        context: &'static str,
        message: String,
    },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `SerializationFailure`
    pub fn serialization(context: &'static str, message: impl Into<String>) -> Self {
        Self::SerializationFailure {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `TransportFailure`
    pub fn transport(context: &'static str, source: io::Error) -> Self {
        Self::TransportFailure { context, source }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::RandomnessFailure { message, .. } => Self::RandomnessFailure { context, message },
            Self::TransportFailure { source, .. } => Self::TransportFailure { context, source },
            Self::SerializationFailure { message, .. } => {
                Self::SerializationFailure { context, message }
            }
            Self::ArithmeticUndefined { .. } => Self::ArithmeticUndefined { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::Protocol { message, .. } => Self::Protocol { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::RandomnessFailure { context, .. }
            | Self::TransportFailure { context, .. }
            | Self::SerializationFailure { context, .. }
            | Self::ArithmeticUndefined { context }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::Protocol { context, .. } => context,
        }
    }
}

//! Error handling for the key exchange

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::TransportFailure {
            context: "I/O operation",
            source: e,
        }
    }
}

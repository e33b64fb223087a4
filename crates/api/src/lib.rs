//! Public API traits and types for dhec
//!
//! This crate provides the public API surface shared by every dhec crate:
//! the error type used at crate boundaries and the randomness trait that
//! key generation is written against.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::RandomSource;

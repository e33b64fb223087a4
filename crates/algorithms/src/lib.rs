//! Elliptic-curve arithmetic for the dhec key exchange
//!
//! This crate provides the numeric engine the exchange is built on:
//!
//! - [`ec::Field`]: modular arithmetic over the curve's prime modulus
//! - [`ec::Point`] and [`ec::Curve`]: the curve group law with an explicit
//!   identity element, and left-to-right double-and-add scalar multiplication
//! - [`random`]: private scalar generation from an external CSPRNG
//!
//! Values are arbitrary-precision integers (`num_bigint::BigUint`). Nothing
//! here is constant-time; timing depends on the bits of the scalar.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::{Curve, Field, Point};

// Private scalar randomness
pub mod random;
pub use random::{generate_scalar, CommandSource, RngSource};

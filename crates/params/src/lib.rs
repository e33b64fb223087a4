//! Constant values for dhec
//!
//! Curve parameters are kept as hex strings so that they read exactly as
//! published; `dhec-algorithms` parses them into big integers once, when a
//! curve value is constructed.

#![deny(missing_docs)]

pub mod curve;
pub mod protocol;

pub use curve::{Secp256k1, TinyCurve};
pub use protocol::{
    DEFAULT_ADDR, DEFAULT_PRIVATE_KEY_BITS, FRAME_HEADER_LEN, MAX_FRAME_LEN, MIN_PRIVATE_KEY_BITS,
};

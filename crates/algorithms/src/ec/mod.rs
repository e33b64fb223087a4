//! Elliptic Curve Primitives
//!
//! Short Weierstrass curves `y² = x³ + a·x + b` over a prime field, with
//! affine points and an explicit identity element. The production curve is
//! secp256k1 ([`Curve::secp256k1`]); any other curve has to be built through
//! [`Curve::new`].

mod curve;
mod field;
mod point;

pub use curve::Curve;
pub use field::Field;
pub use point::Point;

use crate::error::{Error, Result};
use num_bigint::BigUint;

/// Parse a hex constant (no `0x` prefix, `:` separators allowed) into an integer.
pub fn parse_hex(name: &'static str, hex: &str) -> Result<BigUint> {
    let digits: String = hex.chars().filter(|&c| c != ':').collect();
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, "not a hexadecimal integer"))
}

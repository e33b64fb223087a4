//! Key pairs and shared secrets

use dhec_algorithms::error::to_core_result;
use dhec_algorithms::{generate_scalar, Curve, Point};
use dhec_api::{Error, RandomSource, Result};
use num_bigint::BigUint;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Private scalar, stored big-endian and wiped on drop.
///
/// It has no serialization and its `Debug` output is redacted; it never
/// leaves the process.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar(Vec<u8>);

impl PrivateScalar {
    /// Take ownership of a scalar value.
    pub fn new(k: &BigUint) -> Self {
        PrivateScalar(k.to_bytes_be())
    }

    fn value(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(..)")
    }
}

/// A private scalar and its public point `k·G`.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateScalar,
    public: Point,
}

impl KeyPair {
    /// Generate a key pair from `bits` bits of randomness.
    ///
    /// The scalar is reduced into `[1, n-1]`.
    pub fn generate<S: RandomSource + ?Sized>(
        curve: &Curve,
        source: &mut S,
        bits: usize,
    ) -> Result<Self> {
        let k = generate_scalar(curve, source, bits)?;
        Self::from_scalar(curve, &k)
    }

    /// Build a key pair from a known scalar.
    ///
    /// The scalar is used as given, without reduction or range checks.
    pub fn from_scalar(curve: &Curve, k: &BigUint) -> Result<Self> {
        let public = to_core_result(curve.mul_base(k), "public key derivation")?;
        Ok(KeyPair {
            private: PrivateScalar::new(k),
            public,
        })
    }

    /// The public point.
    pub fn public(&self) -> &Point {
        &self.public
    }

    /// Compute `private · peer` and keep its x-coordinate.
    ///
    /// The peer point is not checked against the curve equation here.
    pub fn derive_secret(&self, curve: &Curve, peer: &Point) -> Result<SharedSecret> {
        let shared = to_core_result(
            curve.mul(peer, &self.private.value()),
            "shared secret derivation",
        )?;
        match shared {
            Point::Affine { x, .. } => Ok(SharedSecret::from_x(curve, &x)),
            Point::Identity => Err(Error::InvalidPoint {
                context: "shared secret derivation",
                message: "shared point is the identity".into(),
            }),
        }
    }
}

/// The x-coordinate of the agreed point, big-endian and padded to the field
/// size. Compared in constant time and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    fn from_x(curve: &Curve, x: &BigUint) -> Self {
        let width = curve.p().bits().div_ceil(8) as usize;
        let raw = x.to_bytes_be();
        let mut bytes = vec![0u8; width.saturating_sub(raw.len())];
        bytes.extend_from_slice(&raw);
        SharedSecret(bytes)
    }

    /// Raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex of the padded bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The x-coordinate as an integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

//! Prime field arithmetic

use crate::error::{validate, Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// The integers modulo a prime `p`.
///
/// Every operation accepts unreduced operands and returns a value in `[0, p-1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    p: BigUint,
}

impl Field {
    /// Create the field of integers modulo `p`.
    ///
    /// `p` is expected to be prime; only `p >= 3` is checked.
    pub fn new(p: BigUint) -> Result<Self> {
        validate::parameter(p >= BigUint::from(3u32), "Field", "modulus must be at least 3")?;
        Ok(Field { p })
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Reduce `a` into `[0, p-1]`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    /// `a + b mod p`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    /// `a - b mod p`
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (a + &self.p - b) % &self.p
    }

    /// `-a mod p`
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// `a · b mod p`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// `a² mod p`
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `k · a mod p` for a small constant `k`
    pub fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.p
    }

    /// Multiplicative inverse `a⁻¹ mod p` via the extended Euclidean algorithm.
    ///
    /// Returns [`Error::ArithmeticUndefined`] when `a` shares a factor with
    /// the modulus, which for a prime modulus means `a ≡ 0`.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::ArithmeticUndefined {
                operation: "field inversion",
            });
        }

        let m = BigInt::from(self.p.clone());
        let gcd = BigInt::from(a).extended_gcd(&m);
        if !gcd.gcd.is_one() {
            return Err(Error::ArithmeticUndefined {
                operation: "field inversion",
            });
        }

        // x may be negative; bring it back into [0, p-1]
        gcd.x
            .mod_floor(&m)
            .to_biguint()
            .ok_or(Error::ArithmeticUndefined {
                operation: "field inversion",
            })
    }

    /// `a / b mod p`
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        Ok(self.mul(a, &self.inv(b)?))
    }
}

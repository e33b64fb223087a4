//! Trait definition for sources of private-key randomness

use crate::Result;
use num_bigint::BigUint;

/// A source of uniformly distributed random integers.
///
/// Implementations wrap an external cryptographically secure generator.
/// A generator that is unavailable or returns malformed output must be
/// reported as [`Error::RandomnessFailure`](crate::Error::RandomnessFailure),
/// never papered over with a zero or a partially filled value.
pub trait RandomSource {
    /// Returns a random integer in `[0, 2^bits)`.
    fn random_bits(&mut self, bits: usize) -> Result<BigUint>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_bits(&mut self, bits: usize) -> Result<BigUint> {
        (**self).random_bits(bits)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn random_bits(&mut self, bits: usize) -> Result<BigUint> {
        (**self).random_bits(bits)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

//! Trait definitions for the key exchange collaborators

pub mod random;

pub use random::RandomSource;

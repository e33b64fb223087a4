//! Integration test support for dhec
//!
//! Known-answer vectors live as TOML files under `src/vectors/` and are
//! loaded through [`vectors`].

pub mod vectors;

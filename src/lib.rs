//! # dhec
//!
//! Elliptic-curve Diffie-Hellman key exchange over secp256k1 between a TCP
//! server and its clients.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dhec-api`]: error type and the randomness trait
//! - [`dhec-params`]: curve constants and protocol defaults
//! - [`dhec-algorithms`]: field and group arithmetic, scalar generation
//! - [`dhec-exchange`]: key pairs, wire format, handshake and TCP transport
//!
//! It also carries what the `dhec-server` and `dhec-client` binaries share:
//! [`config`] and [`logging`].

pub use dhec_algorithms as algorithms;
pub use dhec_api as api;
pub use dhec_exchange as exchange;
pub use dhec_params as params;

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, RandomSourceKind};

/// Common imports for dhec users
pub mod prelude {
    pub use crate::api::{Error, RandomSource, Result};

    pub use crate::algorithms::{CommandSource, Curve, Point, RngSource};

    pub use crate::exchange::{
        Client, KeyPair, Role, Server, Session, SessionOptions, SharedSecret, TransportOptions,
    };

    pub use crate::config::Config;
}

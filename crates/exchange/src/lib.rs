//! Elliptic-curve Diffie-Hellman key exchange
//!
//! This crate implements the two-message handshake on top of
//! `dhec-algorithms`: key pairs and shared secrets, the JSON point codec,
//! length-prefixed framing, the per-connection [`Session`] state machine, and
//! a blocking TCP [`Server`]/[`Client`] pair.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod framing;
pub mod keypair;
pub mod session;
pub mod transport;

// Re-exports
pub use codec::{decode_point, encode_point};
pub use framing::{read_frame, write_frame};
pub use keypair::{KeyPair, PrivateScalar, SharedSecret};
pub use session::{Role, Session, SessionOptions, SessionState};
pub use transport::{serve_connection, Client, Server, TransportOptions};

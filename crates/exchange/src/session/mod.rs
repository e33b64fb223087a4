//! Per-connection handshake state machine
//!
//! A session walks `Idle → KeyGenerated → PeerPointReceived → SecretDerived`.
//! Both roles compute the same things; they differ only in message order:
//! the [`Role::Initiator`] (client) sends its public point first, the
//! [`Role::Responder`] (server) reads the peer's point first.

use crate::codec::{decode_point, encode_point};
use crate::framing::{read_frame, write_frame};
use crate::keypair::{KeyPair, SharedSecret};
use dhec_algorithms::{Curve, Point};
use dhec_api::{Error, RandomSource, Result, ResultExt};
use dhec_params::DEFAULT_PRIVATE_KEY_BITS;
use log::debug;
use std::io::{Read, Write};
use std::sync::Arc;

/// Which side of the handshake a session plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Connects and sends first
    Initiator,
    /// Accepts and sends second
    Responder,
}

/// Handshake progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No key pair yet
    Idle,
    /// Local key pair available, peer point not yet received
    KeyGenerated,
    /// Peer point recorded
    PeerPointReceived,
    /// Shared secret computed
    SecretDerived,
}

/// Tunables shared by every session of a process
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Reject peer points that do not satisfy the curve equation.
    ///
    /// Off by default: received points are trusted as they arrive.
    pub validate_peer_points: bool,
    /// Random bits drawn for a fresh private scalar.
    pub private_key_bits: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            validate_peer_points: false,
            private_key_bits: DEFAULT_PRIVATE_KEY_BITS,
        }
    }
}

/// One handshake with one peer.
pub struct Session {
    curve: Arc<Curve>,
    role: Role,
    options: SessionOptions,
    state: SessionState,
    keypair: Option<Arc<KeyPair>>,
    peer: Option<Point>,
    secret: Option<SharedSecret>,
}

impl Session {
    /// A session with no key pair yet, in `Idle`.
    pub fn new(curve: Arc<Curve>, role: Role, options: SessionOptions) -> Self {
        Session {
            curve,
            role,
            options,
            state: SessionState::Idle,
            keypair: None,
            peer: None,
            secret: None,
        }
    }

    /// A session reusing an existing key pair, starting in `KeyGenerated`.
    ///
    /// The server shares its single key pair with every connection this way.
    pub fn with_keypair(
        curve: Arc<Curve>,
        role: Role,
        keypair: Arc<KeyPair>,
        options: SessionOptions,
    ) -> Self {
        let mut session = Session::new(curve, role, options);
        session.keypair = Some(keypair);
        session.state = SessionState::KeyGenerated;
        session
    }

    /// Which side of the handshake this session plays.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current handshake progress.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Curve the exchange runs on.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Generate the local key pair. `Idle → KeyGenerated`.
    pub fn generate_keypair<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> Result<&Point> {
        self.expect_state(SessionState::Idle, "generate key pair")?;
        let keypair = KeyPair::generate(&self.curve, source, self.options.private_key_bits)?;
        debug!(
            "{:?} generated a key pair on {} using the {} source",
            self.role,
            self.curve.name(),
            source.name()
        );
        self.state = SessionState::KeyGenerated;
        Ok(self.keypair.insert(Arc::new(keypair)).public())
    }

    /// The local public point, available from `KeyGenerated` on.
    pub fn public_point(&self) -> Result<&Point> {
        self.keypair
            .as_deref()
            .map(KeyPair::public)
            .ok_or_else(|| protocol_error("public point", "no key pair has been generated"))
    }

    /// Record the peer's public point. `KeyGenerated → PeerPointReceived`.
    pub fn receive_peer_point(&mut self, point: Point) -> Result<()> {
        self.expect_state(SessionState::KeyGenerated, "receive peer point")?;
        if self.options.validate_peer_points && !self.curve.contains(&point) {
            return Err(Error::InvalidPoint {
                context: "receive peer point",
                message: format!("peer point is not on {}", self.curve.name()),
            });
        }
        self.peer = Some(point);
        self.state = SessionState::PeerPointReceived;
        Ok(())
    }

    /// The peer's public point, once received.
    pub fn peer_point(&self) -> Option<&Point> {
        self.peer.as_ref()
    }

    /// Compute the shared secret. `PeerPointReceived → SecretDerived`.
    pub fn derive_secret(&mut self) -> Result<&SharedSecret> {
        self.expect_state(SessionState::PeerPointReceived, "derive secret")?;
        let (keypair, peer) = match (self.keypair.as_deref(), self.peer.as_ref()) {
            (Some(keypair), Some(peer)) => (keypair, peer),
            _ => return Err(protocol_error("derive secret", "session is missing key material")),
        };
        let secret = keypair.derive_secret(&self.curve, peer)?;
        self.state = SessionState::SecretDerived;
        Ok(self.secret.insert(secret))
    }

    /// Run the two-message exchange over `stream` and derive the secret.
    ///
    /// The session must already hold a key pair.
    pub fn handshake<S: Read + Write + ?Sized>(&mut self, stream: &mut S) -> Result<SharedSecret> {
        self.expect_state(SessionState::KeyGenerated, "handshake")?;

        let peer = match self.role {
            Role::Initiator => {
                self.send_public_point(stream)?;
                read_peer_point(stream)?
            }
            Role::Responder => {
                let peer = read_peer_point(stream)?;
                self.send_public_point(stream)?;
                peer
            }
        };

        self.receive_peer_point(peer)?;
        let secret = self.derive_secret()?.clone();
        debug!("{:?} derived shared secret {}", self.role, secret.to_hex());
        Ok(secret)
    }

    fn send_public_point<W: Write + ?Sized>(&self, stream: &mut W) -> Result<()> {
        let payload = encode_point(self.public_point()?)?;
        write_frame(stream, &payload).with_context("send public point")?;
        debug!("{:?} sent its public point ({} bytes)", self.role, payload.len());
        Ok(())
    }

    fn expect_state(&self, expected: SessionState, operation: &'static str) -> Result<()> {
        if self.state != expected {
            return Err(protocol_error(
                operation,
                format!("session is in {:?}, expected {:?}", self.state, expected),
            ));
        }
        Ok(())
    }
}

fn read_peer_point<R: Read + ?Sized>(stream: &mut R) -> Result<Point> {
    let payload = read_frame(stream).with_context("read peer point")?;
    decode_point(&payload).with_context("read peer point")
}

fn protocol_error(context: &'static str, message: impl Into<String>) -> Error {
    Error::Protocol {
        context,
        message: message.into(),
    }
}

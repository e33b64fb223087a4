//! Blocking TCP transport
//!
//! The [`Server`] accepts connections in a loop and runs each handshake on its
//! own thread, sharing one curve and one key pair read-only. The [`Client`]
//! dials once and runs a single handshake.

use crate::keypair::{KeyPair, SharedSecret};
use crate::session::{Role, Session, SessionOptions};
use dhec_algorithms::{Curve, Point};
use dhec_api::{Error, Result};
use log::{info, warn};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Connection-level settings
#[derive(Clone, Debug, Default)]
pub struct TransportOptions {
    /// Read/write timeout on every connection. `None` waits forever.
    pub io_timeout: Option<Duration>,
    /// Settings for the handshake run on each connection
    pub session: SessionOptions,
}

fn configure_stream(stream: &TcpStream, options: &TransportOptions) -> Result<()> {
    stream
        .set_read_timeout(options.io_timeout)
        .and_then(|()| stream.set_write_timeout(options.io_timeout))
        .map_err(|e| Error::transport("configure stream", e))
}

/// Run the responder side of one handshake on an accepted connection.
pub fn serve_connection(
    mut stream: TcpStream,
    curve: Arc<Curve>,
    keypair: Arc<KeyPair>,
    options: &TransportOptions,
) -> Result<SharedSecret> {
    configure_stream(&stream, options)?;
    let mut session = Session::with_keypair(curve, Role::Responder, keypair, options.session.clone());
    session.handshake(&mut stream)
}

fn secret_message(peer: SocketAddr, secret: &SharedSecret) -> String {
    format!("Generated secret key with {}: {}", peer, secret.to_hex())
}

/// ECDH responder listening on a TCP socket.
pub struct Server {
    listener: TcpListener,
    curve: Arc<Curve>,
    keypair: Arc<KeyPair>,
    options: TransportOptions,
}

impl Server {
    /// Bind the listening socket. The key pair is shared by all connections.
    pub fn bind<A: ToSocketAddrs>(
        addr: A,
        curve: Arc<Curve>,
        keypair: Arc<KeyPair>,
        options: TransportOptions,
    ) -> Result<Self> {
        let listener = TcpListener::bind(addr).map_err(|e| Error::transport("server bind", e))?;
        Ok(Server {
            listener,
            curve,
            keypair,
            options,
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| Error::transport("server local address", e))
    }

    /// The point every client receives.
    pub fn public_point(&self) -> &Point {
        self.keypair.public()
    }

    /// Serve forever, logging each derived secret at info level.
    pub fn run(self) -> Result<()> {
        self.run_with(|peer, secret: &SharedSecret| info!("{}", secret_message(peer, secret)))
    }

    /// Serve forever, handing each derived secret to `on_secret`.
    ///
    /// Every accepted connection gets its own thread. A failed handshake is
    /// logged and dropped; accept errors are logged and skipped.
    pub fn run_with<F>(self, on_secret: F) -> Result<()>
    where
        F: Fn(SocketAddr, &SharedSecret) + Send + Sync + 'static,
    {
        let on_secret = Arc::new(on_secret);
        info!(
            "server ready to accept connections on {}",
            self.local_addr()?
        );

        for incoming in self.listener.incoming() {
            let stream = match incoming {
                Ok(stream) => stream,
                Err(e) => {
                    warn!("error accepting connection: {}", e);
                    continue;
                }
            };
            let peer = match stream.peer_addr() {
                Ok(peer) => peer,
                Err(e) => {
                    warn!("dropping connection without a peer address: {}", e);
                    continue;
                }
            };
            info!("accepted connection from {}", peer);

            let curve = Arc::clone(&self.curve);
            let keypair = Arc::clone(&self.keypair);
            let options = self.options.clone();
            let on_secret = Arc::clone(&on_secret);
            let spawned = thread::Builder::new()
                .name(format!("dhec-conn-{}", peer))
                .spawn(move || match serve_connection(stream, curve, keypair, &options) {
                    Ok(secret) => on_secret(peer, &secret),
                    Err(e) => warn!("handshake with {} failed: {}", peer, e),
                });
            if let Err(e) = spawned {
                warn!("failed to spawn handler for {}: {}", peer, e);
            }
        }

        Ok(())
    }
}

/// ECDH initiator connected to a server.
pub struct Client {
    stream: TcpStream,
    session: Session,
}

impl Client {
    /// Dial `addr` and prepare an initiator session around `keypair`.
    pub fn connect<A: ToSocketAddrs>(
        addr: A,
        curve: Arc<Curve>,
        keypair: Arc<KeyPair>,
        options: &TransportOptions,
    ) -> Result<Self> {
        let stream = TcpStream::connect(addr).map_err(|e| Error::transport("client connect", e))?;
        configure_stream(&stream, options)?;
        let session = Session::with_keypair(curve, Role::Initiator, keypair, options.session.clone());
        Ok(Client { stream, session })
    }

    /// Address of the server this client dialed.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        self.stream
            .peer_addr()
            .map_err(|e| Error::transport("client peer address", e))
    }

    /// Send our point, read the server's and derive the secret.
    ///
    /// The connection is closed when this returns.
    pub fn handshake(mut self) -> Result<SharedSecret> {
        self.session.handshake(&mut self.stream)
    }
}

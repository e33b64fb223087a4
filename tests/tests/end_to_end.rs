//! Loopback TCP exchanges between a server and several clients

use dhec_algorithms::{Curve, Point, RngSource};
use dhec_api::Error;
use dhec_exchange::framing::write_frame;
use dhec_exchange::{encode_point, Client, KeyPair, Server, SessionOptions, SharedSecret, TransportOptions};
use dhec_params::TinyCurve;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::net::{SocketAddr, TcpStream};
use std::sync::{mpsc, Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

fn tiny_curve() -> Curve {
    let big = BigUint::from;
    Curve::new(
        "tiny",
        big(TinyCurve::A),
        big(TinyCurve::B),
        big(TinyCurve::P),
        big(TinyCurve::N),
        Point::affine(big(TinyCurve::GX), big(TinyCurve::GY)),
    )
    .unwrap()
}

fn fixed(curve: &Curve, k: u32) -> Arc<KeyPair> {
    Arc::new(KeyPair::from_scalar(curve, &BigUint::from(k)).unwrap())
}

/// Bind on an ephemeral port and serve in the background. Each derived
/// secret is reported with the peer address it belongs to.
fn start_server(
    curve: Arc<Curve>,
    keypair: Arc<KeyPair>,
    options: TransportOptions,
) -> (SocketAddr, mpsc::Receiver<(SocketAddr, SharedSecret)>) {
    let server = Server::bind("127.0.0.1:0", curve, keypair, options).unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    thread::spawn(move || {
        server
            .run_with(move |peer, secret| {
                let _ = tx.lock().unwrap().send((peer, secret.clone()));
            })
            .unwrap();
    });
    (addr, rx)
}

#[test]
fn test_fixed_scalars_over_tcp() {
    let curve = Arc::new(Curve::secp256k1());
    let (addr, secrets) = start_server(curve.clone(), fixed(&curve, 7), TransportOptions::default());

    let client = Client::connect(addr, curve.clone(), fixed(&curve, 5), &TransportOptions::default()).unwrap();
    let secret = client.handshake().unwrap();

    let (_, server_secret) = secrets.recv_timeout(WAIT).unwrap();
    assert_eq!(secret, server_secret);
    assert_eq!(
        secret.to_hex(),
        "605bdb019981718b986d0f07e834cb0d9deb8360ffb7f61df982345ef27a7479"
    );
}

#[test]
fn test_tiny_curve_over_tcp() {
    let curve = Arc::new(tiny_curve());
    let (addr, secrets) = start_server(curve.clone(), fixed(&curve, 7), TransportOptions::default());

    let client = Client::connect(addr, curve.clone(), fixed(&curve, 5), &TransportOptions::default()).unwrap();
    let secret = client.handshake().unwrap();

    // 35·G = 16·G = (10, 11)
    assert_eq!(secret.to_biguint(), BigUint::from(10u32));
    assert_eq!(secret.to_hex(), "0a");
    assert_eq!(secrets.recv_timeout(WAIT).unwrap().1, secret);
}

#[test]
fn test_concurrent_clients_get_distinct_secrets() {
    const CLIENTS: usize = 4;

    let curve = Arc::new(Curve::secp256k1());
    let mut server_rng = RngSource::new(ChaCha20Rng::seed_from_u64(1));
    let server_pair = Arc::new(KeyPair::generate(&curve, &mut server_rng, 256).unwrap());
    let (addr, secrets) = start_server(curve.clone(), server_pair.clone(), TransportOptions::default());

    let barrier = Arc::new(Barrier::new(CLIENTS));
    let handles: Vec<_> = (0..CLIENTS)
        .map(|i| {
            let curve = curve.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let mut rng = RngSource::new(ChaCha20Rng::seed_from_u64(100 + i as u64));
                let pair = Arc::new(KeyPair::generate(&curve, &mut rng, 256).unwrap());
                let client = Client::connect(addr, curve.clone(), pair.clone(), &TransportOptions::default()).unwrap();
                barrier.wait();
                let secret = client.handshake().unwrap();
                (pair, secret)
            })
        })
        .collect();

    let mut client_secrets = Vec::new();
    for handle in handles {
        let (pair, secret) = handle.join().unwrap();
        // What the server must have derived for this client
        assert_eq!(secret, server_pair.derive_secret(&curve, pair.public()).unwrap());
        client_secrets.push(secret);
    }

    let mut server_secrets = Vec::new();
    for _ in 0..CLIENTS {
        server_secrets.push(secrets.recv_timeout(WAIT).unwrap().1);
    }

    for (i, secret) in client_secrets.iter().enumerate() {
        assert!(server_secrets.contains(secret));
        for other in &client_secrets[i + 1..] {
            assert_ne!(secret, other);
        }
    }
}

#[test]
fn test_server_keeps_serving_after_bad_clients() {
    let curve = Arc::new(Curve::secp256k1());
    let (addr, secrets) = start_server(curve.clone(), fixed(&curve, 7), TransportOptions::default());

    // Not JSON
    let mut garbage = TcpStream::connect(addr).unwrap();
    write_frame(&mut garbage, b"this is not a point").unwrap();

    // Header promises more than is ever sent
    let mut truncated = TcpStream::connect(addr).unwrap();
    truncated.write_all(&[0, 0, 0, 64, b'{']).unwrap();
    drop(truncated);

    // Connects and leaves without a word
    drop(TcpStream::connect(addr).unwrap());

    let client = Client::connect(addr, curve.clone(), fixed(&curve, 5), &TransportOptions::default()).unwrap();
    let secret = client.handshake().unwrap();

    let (_, server_secret) = secrets.recv_timeout(WAIT).unwrap();
    assert_eq!(secret, server_secret);
    assert!(secrets.try_recv().is_err());
    drop(garbage);
}

#[test]
fn test_validating_server_drops_off_curve_points() {
    let curve = Arc::new(Curve::secp256k1());
    let options = TransportOptions {
        session: SessionOptions {
            validate_peer_points: true,
            ..SessionOptions::default()
        },
        ..TransportOptions::default()
    };
    let (addr, secrets) = start_server(curve.clone(), fixed(&curve, 7), options);

    let bogus = Point::affine(BigUint::from(1u32), BigUint::from(1u32));
    let mut stream = TcpStream::connect(addr).unwrap();
    write_frame(&mut stream, &encode_point(&bogus).unwrap()).unwrap();
    stream.set_read_timeout(Some(WAIT)).unwrap();

    // The server reads our point, sends its own, then rejects ours
    let reply = dhec_exchange::read_frame(&mut stream).unwrap();
    assert_eq!(dhec_exchange::decode_point(&reply).unwrap(), *fixed(&curve, 7).public());
    assert!(secrets.recv_timeout(Duration::from_millis(500)).is_err());

    // A well-formed client still gets through
    let client = Client::connect(addr, curve.clone(), fixed(&curve, 5), &TransportOptions::default()).unwrap();
    let secret = client.handshake().unwrap();
    assert_eq!(secrets.recv_timeout(WAIT).unwrap().1, secret);
}

#[test]
fn test_client_against_missing_server() {
    let curve = Arc::new(Curve::secp256k1());
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    match Client::connect(addr, curve.clone(), fixed(&curve, 5), &TransportOptions::default()) {
        Err(Error::TransportFailure { .. }) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("connected to a closed port"),
    }
}

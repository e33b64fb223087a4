//! ECDH server: one key pair, one thread per connection, serves forever.

use dhec::algorithms::Curve;
use dhec::exchange::{KeyPair, Server};
use dhec::{logging, Config};
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

fn run(config: &Config) -> dhec::api::Result<()> {
    let curve = Arc::new(Curve::secp256k1());
    let mut source = config.random_source();
    let keypair = KeyPair::generate(&curve, &mut source, config.private_key_bits)?;
    info!(
        "generated server key pair on {} using the {} source",
        curve.name(),
        source.name()
    );

    let server = Server::bind(
        config.listen_addr.as_str(),
        curve,
        Arc::new(keypair),
        config.transport_options(),
    )?;
    server.run()
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dhec-server: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("dhec-server: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(level) {
        eprintln!("dhec-server: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! ECDH client: one handshake with the configured server.

use dhec::algorithms::Curve;
use dhec::exchange::{Client, KeyPair};
use dhec::{logging, Config};
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

fn run(config: &Config) -> dhec::api::Result<String> {
    info!("connecting to {}", config.server_addr);
    let curve = Arc::new(Curve::secp256k1());
    let mut source = config.random_source();
    let keypair = KeyPair::generate(&curve, &mut source, config.private_key_bits)?;

    let client = Client::connect(
        config.server_addr.as_str(),
        curve,
        Arc::new(keypair),
        &config.transport_options(),
    )?;
    let secret = client.handshake()?;
    Ok(secret.to_hex())
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dhec-client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("dhec-client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(level) {
        eprintln!("dhec-client: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(secret) => {
            println!("Generated secret key: {}", secret);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("key exchange failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! acplink Agent Binary
//!
//! Runs the ACP handshake over stdin/stdout. Logs go to stderr, since stdout
//! carries the protocol.

use clap::Parser;
use acplink::{Channel, Config, Connection};
use tracing_subscriber::{fmt, EnvFilter};

/// acplink Agent
#[derive(Parser, Debug)]
#[command(name = "acplink-agent")]
#[command(about = "Connect to an ACP host over standard input/output")]
#[command(version)]
struct Args {
    /// Process name the host must assert
    #[arg(short, long, env = "ACP_NAME")]
    name: String,

    /// Lowest supported protocol version
    #[arg(long, env = "ACP_PROTOCOL_MIN", default_value = "0")]
    protocol_min: u16,

    /// Highest supported protocol version
    #[arg(long, env = "ACP_PROTOCOL_MAX", default_value = "0")]
    protocol_max: u16,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,acplink=debug"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    if args.protocol_min > args.protocol_max {
        tracing::error!(
            "--protocol-min {} exceeds --protocol-max {}",
            args.protocol_min,
            args.protocol_max
        );
        std::process::exit(2);
    }

    tracing::info!("acplink agent v{}", acplink::VERSION);

    // Build config from args
    let config = Config::builder()
        .name(args.name)
        .protocol_range(args.protocol_min, args.protocol_max)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut connection = Connection::new(Channel::stdio(), config);
    match connection.connect() {
        Ok(version) => {
            tracing::info!("Connected to host, protocol {}", version);
        }
        Err(e) => {
            tracing::error!("Handshake failed: {}", e);
            std::process::exit(1);
        }
    }
}

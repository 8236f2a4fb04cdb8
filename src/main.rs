//! Binary entry point: flag parsing, logger setup, server startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use nanohttp_rs::{HttpServer, ServerConfig};

/// A minimal one-request-per-connection HTTP/1.1 server.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:4221")]
    address: SocketAddr,

    /// Base directory for the /files/ routes.
    #[arg(long, default_value = ".")]
    directory: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();
    let config = ServerConfig {
        addr: args.address,
        files_dir: args.directory,
    };

    let server = HttpServer::new(config);
    server.start().await?;

    Ok(())
}

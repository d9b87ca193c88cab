//! ft-responder - Entry Point
//!
//! A minimal file transfer responder: a peer sends a command and a data
//! port over a control connection, and the server dials the peer back on
//! that port to deliver a tagged response.

use log::{error, info};
use std::process;

use ft_responder::config::{self, ServerConfig};
use ft_responder::server::Server;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let control_port = match config::port_from_args(&args) {
        Ok(port) => port,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!("usage: ft-responder PORT");
            eprintln!("\tPORT: control port, in range 4000-65000");
            process::exit(1);
        }
    };

    let config = match ServerConfig::load(control_port) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: invalid configuration: {}", e);
            process::exit(1);
        }
    };

    info!("Launching file transfer responder...");

    let server = match Server::bind(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Server terminated: {}", e);
        process::exit(1);
    }
}

//! Server core
//!
//! Owns the control listener and the accept loop. Requests are served
//! one at a time: an accepted connection is handled to completion before
//! the next accept. A failed request is logged and the loop keeps going;
//! a failed accept is fatal since there is no per-client state to save.

use log::{error, info};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::session::handle_request;

pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
}

impl Server {
    /// Binds the control listener on the configured address and port.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let addr = config.control_socket();

        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => {
                info!("Server open and listening on {}", addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", addr, e);
                return Err(ServerError::Bind { addr, source: e });
            }
        };

        info!("Serving directory: {}", config.server_root);

        Ok(Self { listener, config })
    }

    /// The address the control listener actually bound to.
    ///
    /// Differs from the configured address when the port was given as 0
    /// and the OS picked one.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts and serves control connections until a fatal error.
    pub async fn run(&self) -> Result<(), ServerError> {
        loop {
            let (control_stream, peer) = self
                .listener
                .accept()
                .await
                .map_err(ServerError::Accept)?;
            info!("Connection from client {}", peer);

            // One request at a time; the next accept waits for this one.
            if let Err(e) = handle_request(control_stream, peer, &self.config).await {
                error!("Request from {} aborted: {}", peer, e);
            }
        }
    }
}

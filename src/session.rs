//! Request sequencing
//!
//! Serves one accepted control connection start to finish: read the
//! command and data port, dial the peer back on that port, dispatch the
//! command, and drop the data connection. Nothing is remembered between
//! requests, and the control connection is left to the peer to close.

use log::info;
use std::net::SocketAddr;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::config::ServerConfig;
use crate::error::SessionError;
use crate::protocol::{handle_command, recv_message};

/// Serves one request on an accepted control connection.
pub async fn handle_request(
    mut control_stream: TcpStream,
    peer: SocketAddr,
    config: &ServerConfig,
) -> Result<(), SessionError> {
    let command_text = recv_message(&mut control_stream).await?;
    let port_text = recv_message(&mut control_stream).await?;

    info!("Received from {}: {:?}", peer, command_text);

    let data_port: u16 = match port_text.trim().parse() {
        Ok(port) => port,
        Err(_) => return Err(SessionError::InvalidDataPort(port_text)),
    };

    // Give the peer a moment to start listening before dialing back.
    sleep(config.data_connect_delay()).await;

    let data_addr = SocketAddr::new(peer.ip(), data_port);
    let mut data_stream =
        TcpStream::connect(data_addr)
            .await
            .map_err(|e| SessionError::DataConnect {
                addr: data_addr,
                source: e,
            })?;
    info!("Data connection established to {}", data_addr);

    handle_command(&command_text, &mut data_stream, data_addr, config).await?;

    let _ = data_stream.shutdown().await;
    info!("Data connection to {} closed", data_addr);

    Ok(())
}

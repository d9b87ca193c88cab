//! Command handlers module for the file transfer responder.
//!
//! This module decides which of the four responses a request gets and
//! drives the matching transfer. Exactly one response tag goes out per
//! request, always before any payload bytes.

use log::{info, warn};
use std::net::SocketAddr;
use tokio::io::AsyncWrite;

use crate::config::ServerConfig;
use crate::error::TransferError;
use crate::protocol::command::{Command, parse_command};
use crate::protocol::framing::send_message;
use crate::protocol::response::ResponseTag;
use crate::storage;
use crate::transfer::{send_file, send_listing};

/// Dispatches a received command to its corresponding handler.
///
/// # Arguments
///
/// * `command_text` - The command text, already stripped of frame padding.
/// * `data_stream` - The established data connection to answer on.
/// * `peer` - The data connection's remote address, for logging.
/// * `config` - Server configuration naming the served directory.
///
/// # Returns
///
/// * `Result<(), TransferError>` - Ok once the tag and any payload are sent.
pub async fn handle_command<W>(
    command_text: &str,
    data_stream: &mut W,
    peer: SocketAddr,
    config: &ServerConfig,
) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    match parse_command(command_text) {
        Command::List => handle_cmd_list(data_stream, peer, config).await,
        Command::Retrieve(filename) => {
            handle_cmd_retrieve(data_stream, peer, &filename, config).await
        }
        Command::Missing => handle_cmd_missing(data_stream, peer).await,
    }
}

/// Handles the listing command: announces the listing and streams it.
async fn handle_cmd_list<W>(
    data_stream: &mut W,
    peer: SocketAddr,
    config: &ServerConfig,
) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    info!("List directory requested on port {}", peer.port());

    send_message(data_stream, &ResponseTag::DirectoryFollows.wire_line()).await?;
    let count = send_listing(data_stream, &config.server_root_path()).await?;

    info!("Sent {} directory entries to {}", count, peer);
    Ok(())
}

/// Handles a file request: checks the name against the served directory,
/// then either announces and streams the file or reports it missing.
async fn handle_cmd_retrieve<W>(
    data_stream: &mut W,
    peer: SocketAddr,
    filename: &str,
    config: &ServerConfig,
) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    info!("File \"{}\" requested on port {}", filename, peer.port());

    let root = config.server_root_path();

    // 1. Membership check against the served directory
    if !storage::contains_entry(&root, filename).await? {
        info!("File \"{}\" not found, notifying {}", filename, peer);
        send_message(data_stream, &ResponseTag::FileNotFound.wire_line()).await?;
        return Ok(());
    }

    // 2. Announce the file, then stream its bytes
    send_message(data_stream, &ResponseTag::FileFollows.wire_line()).await?;
    let total = send_file(data_stream, &root.join(filename)).await?;

    info!("Sent \"{}\" ({} bytes) to {}", filename, total, peer);
    Ok(())
}

/// Handles a request with no usable command: reports it as unrecognized.
async fn handle_cmd_missing<W>(data_stream: &mut W, peer: SocketAddr) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    warn!("Unrecognized command from {}", peer);

    send_message(data_stream, &ResponseTag::UnknownCommand.wire_line()).await?;
    Ok(())
}

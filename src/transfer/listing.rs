//! Module `listing`
//!
//! Streams a directory listing over an established data connection, one
//! framed newline-terminated line per entry. The `~done` line marks the
//! end; no entry count is sent up front, so the peer reads frames until
//! it sees the terminator.

use log::info;
use std::path::Path;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::TransferError;
use crate::protocol::framing::send_message;
use crate::protocol::response::END_OF_LISTING;
use crate::storage;

/// Sends every entry of `dir`, then the end-of-listing line.
///
/// Returns the number of entries sent, not counting the terminator.
pub async fn send_listing<W>(stream: &mut W, dir: &Path) -> Result<usize, TransferError>
where
    W: AsyncWrite + Unpin,
{
    let entries = storage::list_directory(dir).await?;

    for entry in &entries {
        send_message(stream, &format!("{entry}\n")).await?;
    }
    send_message(stream, &format!("{END_OF_LISTING}\n")).await?;

    stream.flush().await.map_err(TransferError::Write)?;

    info!(
        "Listing transfer completed: {} ({} entries)",
        dir.display(),
        entries.len()
    );

    Ok(entries.len())
}

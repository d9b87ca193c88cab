//! Module `file`
//!
//! Streams one file's bytes over an established data connection. Chunks
//! are raw bytes capped at the frame capacity, not framed messages; the
//! peer learns the transfer is complete when the connection closes. A
//! zero-byte file therefore sends nothing at all.

use log::info;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::TransferError;
use crate::protocol::MESSAGE_CAPACITY;

/// Sends the contents of `path` over the data connection.
///
/// Returns the total number of bytes sent.
pub async fn send_file<W>(stream: &mut W, path: &Path) -> Result<u64, TransferError>
where
    W: AsyncWrite + Unpin,
{
    let mut file = File::open(path)
        .await
        .map_err(|e| TransferError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut buffer = [0u8; MESSAGE_CAPACITY];
    let mut total_bytes_sent = 0u64;

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .map_err(|e| TransferError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        if n == 0 {
            break; // EOF
        }

        stream
            .write_all(&buffer[..n])
            .await
            .map_err(TransferError::Write)?;

        total_bytes_sent += n as u64;
    }

    stream.flush().await.map_err(TransferError::Write)?;

    info!(
        "File transfer completed: {} ({total_bytes_sent} bytes)",
        path.display()
    );

    Ok(total_bytes_sent)
}

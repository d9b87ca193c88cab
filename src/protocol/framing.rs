//! Fixed-capacity message framing
//!
//! Every text message, on either connection, travels as one 500-byte
//! frame: the text goes at the front and the rest is zero padding. The
//! receiver reads the full frame and strips the padding. File payload
//! bytes are the only traffic on the wire that is not framed.

use log::warn;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ProtocolError;

/// Size of one framed message, and the ceiling for one file chunk
pub const MESSAGE_CAPACITY: usize = 500;

/// Sends `text` as a single zero-padded frame.
///
/// Text longer than the frame capacity is truncated to fit; the wire
/// format has no way to carry an oversized message.
pub async fn send_message<W>(stream: &mut W, text: &str) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let mut frame = [0u8; MESSAGE_CAPACITY];
    let bytes = text.as_bytes();

    if bytes.len() > MESSAGE_CAPACITY {
        warn!(
            "Message of {} bytes truncated to frame capacity {}",
            bytes.len(),
            MESSAGE_CAPACITY
        );
    }

    let len = bytes.len().min(MESSAGE_CAPACITY);
    frame[..len].copy_from_slice(&bytes[..len]);

    stream.write_all(&frame).await?;
    Ok(())
}

/// Receives one full frame and returns its text with the padding stripped.
pub async fn recv_message<R>(stream: &mut R) -> Result<String, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let mut frame = [0u8; MESSAGE_CAPACITY];
    stream.read_exact(&mut frame).await?;

    let len = frame
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(MESSAGE_CAPACITY);

    Ok(String::from_utf8_lossy(&frame[..len]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_message_pads_to_capacity() {
        let mut buf = Vec::new();
        send_message(&mut buf, "-l").await.unwrap();

        assert_eq!(buf.len(), MESSAGE_CAPACITY);
        assert_eq!(&buf[..2], b"-l");
        assert!(buf[2..].iter().all(|&b| b == 0));
    }

    #[tokio::test]
    async fn test_recv_message_strips_padding() {
        let mut frame = vec![0u8; MESSAGE_CAPACITY];
        frame[..9].copy_from_slice(b"notes.txt");

        let mut reader = frame.as_slice();
        let text = recv_message(&mut reader).await.unwrap();
        assert_eq!(text, "notes.txt");
    }

    #[tokio::test]
    async fn test_round_trip_through_buffer() {
        let mut buf = Vec::new();
        send_message(&mut buf, "51717").await.unwrap();

        let mut reader = buf.as_slice();
        let text = recv_message(&mut reader).await.unwrap();
        assert_eq!(text, "51717");
    }

    #[tokio::test]
    async fn test_back_to_back_frames_stay_separate() {
        let mut buf = Vec::new();
        send_message(&mut buf, "notes.txt").await.unwrap();
        send_message(&mut buf, "4040").await.unwrap();
        assert_eq!(buf.len(), 2 * MESSAGE_CAPACITY);

        let mut reader = buf.as_slice();
        assert_eq!(recv_message(&mut reader).await.unwrap(), "notes.txt");
        assert_eq!(recv_message(&mut reader).await.unwrap(), "4040");
    }

    #[tokio::test]
    async fn test_oversized_message_is_truncated() {
        let long = "x".repeat(MESSAGE_CAPACITY + 100);
        let mut buf = Vec::new();
        send_message(&mut buf, &long).await.unwrap();
        assert_eq!(buf.len(), MESSAGE_CAPACITY);

        let mut reader = buf.as_slice();
        let text = recv_message(&mut reader).await.unwrap();
        assert_eq!(text.len(), MESSAGE_CAPACITY);
    }

    #[tokio::test]
    async fn test_recv_fails_on_short_input() {
        let short = vec![1u8; 100];
        let mut reader = short.as_slice();

        let err = recv_message(&mut reader).await.unwrap_err();
        assert!(matches!(err, ProtocolError::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_empty_message_round_trip() {
        let mut buf = Vec::new();
        send_message(&mut buf, "").await.unwrap();
        assert_eq!(buf.len(), MESSAGE_CAPACITY);

        let mut reader = buf.as_slice();
        assert_eq!(recv_message(&mut reader).await.unwrap(), "");
    }
}

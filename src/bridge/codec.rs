//! Native Messaging Framing
//!
//! Each message is a `u32` length in native byte order followed by that
//! many bytes of UTF-8 JSON.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::constants::MAX_OUTGOING_MESSAGE_BYTES;
use crate::error::{BridgeError, BridgeResult};

const HEADER_LEN: usize = 4;

/// Read one message. Returns `None` when the stream ends cleanly
/// between messages.
pub async fn read_message<R>(reader: &mut R, max_len: usize) -> BridgeResult<Option<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        let n = reader.read(&mut header[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(BridgeError::Truncated { expected: HEADER_LEN, got: filled });
        }
        filled += n;
    }

    let len = u32::from_ne_bytes(header) as usize;
    if len > max_len {
        return Err(BridgeError::MessageTooLarge { len, limit: max_len });
    }

    let mut payload = vec![0u8; len];
    let mut got = 0;
    while got < len {
        let n = reader.read(&mut payload[got..]).await?;
        if n == 0 {
            return Err(BridgeError::Truncated { expected: len, got });
        }
        got += n;
    }

    Ok(Some(payload))
}

/// Write one message and flush it
pub async fn write_message<W>(writer: &mut W, payload: &[u8]) -> BridgeResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    if payload.len() > MAX_OUTGOING_MESSAGE_BYTES {
        return Err(BridgeError::MessageTooLarge {
            len: payload.len(),
            limit: MAX_OUTGOING_MESSAGE_BYTES,
        });
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    frame.extend_from_slice(payload);

    writer.write_all(&frame).await?;
    writer.flush().await?;
    Ok(())
}

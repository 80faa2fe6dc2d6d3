//! Codec trait and implementations for encoding snapshots.
//!
//! The shell doesn't care HOW a room is serialized for machine-readable
//! output. It only needs something that implements [`Codec`]. Today that's
//! [`JsonCodec`]; another format slots in without touching the shell.

use serde::Serialize;

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes.
///
/// `encode` is generic over any `T: Serialize`, so the same codec handles a
/// single [`RoomSnapshot`](crate::RoomSnapshot) or a whole list of them.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// Output is pretty-printed: this codec feeds a terminal, not a socket.
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use roomledger_protocol::{Codec, JsonCodec, SeatNumber};
///
/// let bytes = JsonCodec.encode(&SeatNumber(4)).unwrap();
/// assert_eq!(bytes, b"4");
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec_pretty(value).map_err(ProtocolError::Encode)
    }
}

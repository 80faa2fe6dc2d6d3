//! Error types for the protocol layer.
//!
//! Each crate in Roomledger defines its own error enum. A `ProtocolError`
//! means the problem is in serialization, not in booking logic or in the
//! terminal.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    ///
    /// The inner `serde_json::Error` is kept so the caller can see what
    /// went wrong, while still dealing with `ProtocolError` uniformly.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),
}

//! Unified error type for Roomledger.

use roomledger_protocol::ProtocolError;
use roomledger_room::BookingError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each wrapping variant generates a `From`
/// impl, so `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A booking rule refused the operation (room missing, seat taken...).
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// Encoding a snapshot failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The menu selection was not one of 1-6.
    #[error("Invalid choice. Please try again.")]
    InvalidMenuChoice(String),

    /// The chair number was not an integer.
    #[error("Invalid chair number: {0}")]
    InvalidSeatNumber(String),
}

impl LedgerError {
    /// Returns `true` if the interactive session can't continue after
    /// this error. Everything caused by user input is recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Protocol(_))
    }
}

//! Error types for the booking layer.

use roomledger_protocol::{RoomNumber, SeatNumber};

/// Errors that can occur during registry operations.
///
/// None of these are fatal: the registry is left unchanged and the caller
/// decides how to report it. The messages are written for the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// No registered room has this number.
    #[error("Room {0} not found")]
    RoomNotFound(RoomNumber),

    /// The seat already has an occupant.
    #[error("The chair {0} is already reserved")]
    SeatAlreadyReserved(SeatNumber),

    /// The seat has no occupant to release.
    #[error("The chair {0} is not reserved")]
    SeatNotReserved(SeatNumber),

    /// Every seat is taken. Only raised when capacity enforcement is on.
    #[error("Room {room} is full (capacity {max})")]
    RoomFull { room: RoomNumber, max: usize },

    /// The room number is already registered. Only raised when duplicate
    /// rejection is on.
    #[error("Room {0} already exists")]
    DuplicateRoom(RoomNumber),
}

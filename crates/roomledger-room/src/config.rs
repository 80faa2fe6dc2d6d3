//! Room and registry configuration.

use serde::{Deserialize, Serialize};

/// Default notional number of seats in a room.
pub const DEFAULT_MAX_CAPACITY: usize = 40;

// ---------------------------------------------------------------------------
// RoomConfig
// ---------------------------------------------------------------------------

/// Configuration applied to every room a registry creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Maximum number of occupied seats per room.
    pub max_capacity: usize,

    /// Whether booking refuses new reservations once `max_capacity` seats
    /// are taken. Off by default: capacity is reported by
    /// [`Room::is_room_available`](crate::Room::is_room_available) but not
    /// checked when booking.
    pub enforce_capacity: bool,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            enforce_capacity: false,
        }
    }
}

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`RoomRegistry`](crate::RoomRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Settings handed to each new room.
    pub room: RoomConfig,

    /// Whether `add_room` rejects a room number that is already
    /// registered. Off by default: a duplicate is appended and shadowed by
    /// the earlier room on every lookup.
    pub reject_duplicate_rooms: bool,
}

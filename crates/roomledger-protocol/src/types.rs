//! Core types shared by every Roomledger layer.
//!
//! These are the values that cross crate boundaries: the identifiers the
//! shell passes into the registry, and the snapshots the registry hands
//! back out for rendering or encoding.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The identifier of a room, as typed by the user (e.g. `"R1"`, `"204B"`).
///
/// Room numbers are free-form strings. Comparison is exact and
/// case-sensitive: `"r1"` and `"R1"` are different rooms.
///
/// Same newtype pattern as [`SeatNumber`]: wrapping the `String` keeps a
/// room number from being passed where a host name or traveler name is
/// expected, even though all three are strings underneath.
///
/// `#[serde(transparent)]` serializes this as the bare string, so
/// `RoomNumber("R1")` becomes `"R1"` in JSON rather than `{ "0": "R1" }`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub String);

impl RoomNumber {
    /// Creates a room number from anything string-like.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the room number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

impl From<String> for RoomNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

/// The number of a seat (a "chair") inside a room.
///
/// Seat numbers are plain signed integers. Nothing bounds them: seat 0,
/// seat -3 and seat 500 are all valid keys. `Ord` is derived so seats can
/// key a `BTreeMap` and display in ascending order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SeatNumber(pub i32);

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SeatNumber {
    fn from(seat: i32) -> Self {
        Self(seat)
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// One reserved seat and the traveler sitting in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub seat: SeatNumber,
    pub traveler: String,
}

/// An owned, point-in-time copy of a room.
///
/// Snapshots are what leave the registry when a caller can't hold a borrow
/// (JSON output, or the shared registry where the lock is released before
/// the caller looks at the data). `seats` is ordered by seat number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_number: RoomNumber,
    pub host: String,
    pub start_time: String,
    pub end_time: String,
    /// Notional capacity of the room. Only enforced when the registry is
    /// configured to do so.
    pub max_capacity: usize,
    pub seats: Vec<SeatAssignment>,
}

impl RoomSnapshot {
    /// Returns the traveler in `seat`, if it is reserved.
    pub fn occupant(&self, seat: SeatNumber) -> Option<&str> {
        self.seats
            .iter()
            .find(|a| a.seat == seat)
            .map(|a| a.traveler.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_display_is_bare_string() {
        assert_eq!(RoomNumber::new("R1").to_string(), "R1");
        assert_eq!(RoomNumber::from("204B").as_str(), "204B");
    }

    #[test]
    fn test_room_number_is_case_sensitive() {
        assert_ne!(RoomNumber::from("r1"), RoomNumber::from("R1"));
    }

    #[test]
    fn test_seat_number_orders_numerically() {
        let mut seats = vec![SeatNumber(10), SeatNumber(-1), SeatNumber(2)];
        seats.sort();
        assert_eq!(seats, vec![SeatNumber(-1), SeatNumber(2), SeatNumber(10)]);
    }

    #[test]
    fn test_identifiers_serialize_transparently() {
        let json = serde_json::to_string(&RoomNumber::from("R1")).unwrap();
        assert_eq!(json, "\"R1\"");
        let json = serde_json::to_string(&SeatNumber(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_snapshot_occupant_lookup() {
        let snapshot = RoomSnapshot {
            room_number: "R1".into(),
            host: "H".into(),
            start_time: "9:00".into(),
            end_time: "10:00".into(),
            max_capacity: 40,
            seats: vec![SeatAssignment {
                seat: SeatNumber(3),
                traveler: "Alice".into(),
            }],
        };
        assert_eq!(snapshot.occupant(SeatNumber(3)), Some("Alice"));
        assert_eq!(snapshot.occupant(SeatNumber(4)), None);
    }
}

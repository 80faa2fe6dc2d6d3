//! A single room and the seats reserved inside it.
//!
//! `Room` is deliberately permissive: it will overwrite an occupied seat
//! and silently ignore releasing an empty one. Booking policy (rejecting
//! double reservations, optional capacity limits) lives one layer up in
//! [`RoomRegistry`](crate::RoomRegistry).

use std::collections::BTreeMap;
use std::fmt;

use roomledger_protocol::{RoomNumber, RoomSnapshot, SeatAssignment, SeatNumber};

use crate::RoomConfig;

/// Separator printed after each rendered room.
pub const SEPARATOR: &str = "-----------------------------------";

/// One bookable room: who hosts it, when, and who sits where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    room_number: RoomNumber,
    host: String,
    start_time: String,
    end_time: String,
    max_capacity: usize,
    /// Reserved seats only. A seat missing from the map is available.
    seat_bookings: BTreeMap<SeatNumber, String>,
}

impl Room {
    /// Creates a room with no reservations.
    ///
    /// `host`, `start_time` and `end_time` are stored as given; nothing
    /// parses or validates them.
    pub fn new(
        room_number: impl Into<RoomNumber>,
        host: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        config: &RoomConfig,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            host: host.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            max_capacity: config.max_capacity,
            seat_bookings: BTreeMap::new(),
        }
    }

    pub fn room_number(&self) -> &RoomNumber {
        &self.room_number
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Puts `traveler` in `seat`, replacing whoever was there.
    ///
    /// Returns the displaced occupant, if any. Callers that must not
    /// overwrite check [`is_chair_available`](Self::is_chair_available)
    /// first.
    pub fn reserve_chair(
        &mut self,
        seat: SeatNumber,
        traveler: impl Into<String>,
    ) -> Option<String> {
        self.seat_bookings.insert(seat, traveler.into())
    }

    /// Frees `seat`. Returns the traveler who held it, or `None` if the
    /// seat was already free.
    pub fn release_chair(&mut self, seat: SeatNumber) -> Option<String> {
        self.seat_bookings.remove(&seat)
    }

    /// Returns `true` if nobody holds `seat`.
    pub fn is_chair_available(&self, seat: SeatNumber) -> bool {
        !self.seat_bookings.contains_key(&seat)
    }

    /// Returns `true` while fewer than `max_capacity` seats are taken.
    pub fn is_room_available(&self) -> bool {
        self.seat_bookings.len() < self.max_capacity
    }

    /// Returns the traveler in `seat`, if it is reserved.
    pub fn occupant(&self, seat: SeatNumber) -> Option<&str> {
        self.seat_bookings.get(&seat).map(String::as_str)
    }

    /// Number of reserved seats.
    pub fn occupied_count(&self) -> usize {
        self.seat_bookings.len()
    }

    /// Reserved seats in ascending seat order.
    pub fn seats(&self) -> impl Iterator<Item = (SeatNumber, &str)> {
        self.seat_bookings
            .iter()
            .map(|(seat, traveler)| (*seat, traveler.as_str()))
    }

    /// Returns an owned copy suitable for encoding or sending elsewhere.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_number: self.room_number.clone(),
            host: self.host.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            max_capacity: self.max_capacity,
            seats: self
                .seats()
                .map(|(seat, traveler)| SeatAssignment {
                    seat,
                    traveler: traveler.to_string(),
                })
                .collect(),
        }
    }
}

/// Human-readable listing, one field per line, seats in ascending order,
/// closed by [`SEPARATOR`].
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Room Number: {}", self.room_number)?;
        writeln!(f, "Host: {}", self.host)?;
        writeln!(f, "Start Time: {}", self.start_time)?;
        writeln!(f, "End Time: {}", self.end_time)?;
        writeln!(f, "Chair Bookings:")?;
        for (seat, traveler) in self.seats() {
            writeln!(f, "Chair {seat}: {traveler}")?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}

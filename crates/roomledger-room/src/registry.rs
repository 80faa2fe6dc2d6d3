//! Room registry: owns every room and applies the booking rules.

use roomledger_protocol::{RoomNumber, RoomSnapshot, SeatNumber};

use crate::{BookingError, RegistryConfig, Room};

/// A successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub room_number: RoomNumber,
    pub seat: SeatNumber,
    pub traveler: String,
}

/// A successful release, carrying the traveler who left the seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub room_number: RoomNumber,
    pub seat: SeatNumber,
    pub traveler: String,
}

/// The in-memory collection of rooms.
///
/// Rooms are kept in insertion order and never removed. Lookups scan from
/// the front, so when two rooms share a number the first one registered
/// answers every lookup and the later one is unreachable.
///
/// Like the rest of the core, `RoomRegistry` is single-owner and not
/// thread-safe. Wrap it in a [`SharedRegistry`](crate::SharedRegistry) to
/// use it from concurrent tasks.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    config: RegistryConfig,
}

impl RoomRegistry {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            rooms: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a new room and returns it.
    ///
    /// # Errors
    /// Returns [`BookingError::DuplicateRoom`] if the number is taken and
    /// the registry rejects duplicates. Otherwise never fails.
    pub fn add_room(
        &mut self,
        room_number: impl Into<RoomNumber>,
        host: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<&Room, BookingError> {
        let room_number = room_number.into();

        if self.find_room(&room_number).is_some() {
            if self.config.reject_duplicate_rooms {
                tracing::debug!(room = %room_number, "duplicate room rejected");
                return Err(BookingError::DuplicateRoom(room_number));
            }
            tracing::warn!(
                room = %room_number,
                "room number already registered, new room will be shadowed"
            );
        }

        let room = Room::new(
            room_number,
            host,
            start_time,
            end_time,
            &self.config.room,
        );
        tracing::info!(
            room = %room.room_number(),
            host = room.host(),
            rooms = self.rooms.len() + 1,
            "room added"
        );
        self.rooms.push(room);

        Ok(&self.rooms[self.rooms.len() - 1])
    }

    /// Returns the first room registered under `room_number`.
    pub fn find_room(&self, room_number: &RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_number() == room_number)
    }

    /// Mutable variant of [`find_room`](Self::find_room).
    pub fn find_room_mut(
        &mut self,
        room_number: &RoomNumber,
    ) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.room_number() == room_number)
    }

    /// Reserves `seat` in `room_number` for `traveler`.
    ///
    /// Never overwrites: an occupied seat is rejected and keeps its
    /// current occupant.
    ///
    /// # Errors
    /// - [`BookingError::RoomNotFound`] if no room has this number.
    /// - [`BookingError::SeatAlreadyReserved`] if the seat is taken.
    /// - [`BookingError::RoomFull`] if capacity is enforced and reached.
    pub fn book_room(
        &mut self,
        room_number: &RoomNumber,
        traveler: impl Into<String>,
        seat: SeatNumber,
    ) -> Result<Reservation, BookingError> {
        let enforce_capacity = self.config.room.enforce_capacity;
        let room = self
            .find_room_mut(room_number)
            .ok_or_else(|| BookingError::RoomNotFound(room_number.clone()))?;

        if !room.is_chair_available(seat) {
            tracing::debug!(room = %room_number, %seat, "seat already reserved");
            return Err(BookingError::SeatAlreadyReserved(seat));
        }
        if enforce_capacity && !room.is_room_available() {
            tracing::debug!(
                room = %room_number,
                %seat,
                max = room.max_capacity(),
                "room is full"
            );
            return Err(BookingError::RoomFull {
                room: room_number.clone(),
                max: room.max_capacity(),
            });
        }

        let traveler = traveler.into();
        room.reserve_chair(seat, traveler.clone());
        tracing::info!(
            room = %room_number,
            %seat,
            traveler = traveler.as_str(),
            occupied = room.occupied_count(),
            "seat reserved"
        );

        Ok(Reservation {
            room_number: room_number.clone(),
            seat,
            traveler,
        })
    }

    /// Frees `seat` in `room_number`.
    ///
    /// # Errors
    /// - [`BookingError::RoomNotFound`] if no room has this number.
    /// - [`BookingError::SeatNotReserved`] if the seat is already free.
    pub fn release_room(
        &mut self,
        room_number: &RoomNumber,
        seat: SeatNumber,
    ) -> Result<Release, BookingError> {
        let room = self
            .find_room_mut(room_number)
            .ok_or_else(|| BookingError::RoomNotFound(room_number.clone()))?;

        let traveler = room.release_chair(seat).ok_or_else(|| {
            tracing::debug!(room = %room_number, %seat, "seat not reserved");
            BookingError::SeatNotReserved(seat)
        })?;
        tracing::info!(
            room = %room_number,
            %seat,
            traveler = traveler.as_str(),
            occupied = room.occupied_count(),
            "seat released"
        );

        Ok(Release {
            room_number: room_number.clone(),
            seat,
            traveler,
        })
    }

    /// Looks up a room for rendering.
    ///
    /// # Errors
    /// Returns [`BookingError::RoomNotFound`] if no room has this number.
    pub fn display_room(
        &self,
        room_number: &RoomNumber,
    ) -> Result<&Room, BookingError> {
        self.find_room(room_number).ok_or_else(|| {
            tracing::debug!(room = %room_number, "room not found");
            BookingError::RoomNotFound(room_number.clone())
        })
    }

    /// Every room, in the order it was added.
    pub fn display_all_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Owned copies of every room, in the order they were added.
    pub fn snapshots(&self) -> Vec<RoomSnapshot> {
        self.rooms.iter().map(Room::snapshot).collect()
    }

    /// Returns the number of registered rooms, duplicates included.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

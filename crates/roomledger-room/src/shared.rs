//! A cloneable, lock-serialized handle over a [`RoomRegistry`].
//!
//! The registry itself is plain single-owner data. When several tasks
//! need to book against the same registry (a service front end, a batch
//! importer), they go through a `SharedRegistry` instead. Every operation
//! takes one lock over the whole registry, so two bookings of the same
//! seat can never interleave: one wins, the other sees
//! `SeatAlreadyReserved`.
//!
//! Results are owned values. A `&Room` can't outlive the lock guard, so
//! lookups hand back [`RoomSnapshot`]s instead.

use std::sync::Arc;

use roomledger_protocol::{RoomNumber, RoomSnapshot, SeatNumber};
use tokio::sync::Mutex;

use crate::{BookingError, RegistryConfig, Release, Reservation, RoomRegistry};

/// Shared access to one registry. Cheap to clone; all clones see the same
/// rooms.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<RoomRegistry>>,
}

impl SharedRegistry {
    /// Wraps an existing registry.
    pub fn new(registry: RoomRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Creates a handle over a fresh registry with the given settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::new(RoomRegistry::with_config(config))
    }

    /// See [`RoomRegistry::add_room`].
    pub async fn add_room(
        &self,
        room_number: impl Into<RoomNumber>,
        host: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<RoomSnapshot, BookingError> {
        let mut registry = self.inner.lock().await;
        registry
            .add_room(room_number, host, start_time, end_time)
            .map(|room| room.snapshot())
    }

    /// See [`RoomRegistry::book_room`].
    pub async fn book_room(
        &self,
        room_number: &RoomNumber,
        traveler: impl Into<String>,
        seat: SeatNumber,
    ) -> Result<Reservation, BookingError> {
        self.inner.lock().await.book_room(room_number, traveler, seat)
    }

    /// See [`RoomRegistry::release_room`].
    pub async fn release_room(
        &self,
        room_number: &RoomNumber,
        seat: SeatNumber,
    ) -> Result<Release, BookingError> {
        self.inner.lock().await.release_room(room_number, seat)
    }

    /// Returns a snapshot of the first room registered under
    /// `room_number`.
    pub async fn room(
        &self,
        room_number: &RoomNumber,
    ) -> Result<RoomSnapshot, BookingError> {
        self.inner
            .lock()
            .await
            .display_room(room_number)
            .map(|room| room.snapshot())
    }

    /// Snapshots of every room, in insertion order.
    pub async fn snapshots(&self) -> Vec<RoomSnapshot> {
        self.inner.lock().await.snapshots()
    }

    pub async fn room_count(&self) -> usize {
        self.inner.lock().await.room_count()
    }

    /// Unwraps the registry if this is the last handle, otherwise gives
    /// the handle back.
    pub fn into_inner(self) -> Result<RoomRegistry, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<RoomRegistry> for SharedRegistry {
    fn from(registry: RoomRegistry) -> Self {
        Self::new(registry)
    }
}

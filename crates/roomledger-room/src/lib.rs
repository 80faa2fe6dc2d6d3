//! Rooms, seat reservations, and the booking registry.
//!
//! # Key types
//!
//! - [`Room`] — one room's schedule and its seat-to-traveler map
//! - [`RoomRegistry`] — owns all rooms, applies the booking rules
//! - [`SharedRegistry`] — async, lock-serialized handle for concurrent use
//! - [`RoomConfig`] / [`RegistryConfig`] — capacity and duplicate policy
//! - [`BookingError`] — why a booking operation was refused
//!
//! A seat is either available or reserved by one traveler:
//!
//! ```text
//! Available ──(book_room)──→ Reserved(traveler)
//!     ↑                            │
//!     └───────(release_room)───────┘
//! ```

mod config;
mod error;
mod registry;
mod room;
mod shared;

pub use config::{DEFAULT_MAX_CAPACITY, RegistryConfig, RoomConfig};
pub use error::BookingError;
pub use registry::{Release, Reservation, RoomRegistry};
pub use room::{Room, SEPARATOR};
pub use shared::SharedRegistry;

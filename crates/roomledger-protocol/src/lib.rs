//! Shared vocabulary for Roomledger.
//!
//! This crate defines the values every other layer agrees on:
//!
//! - **Types** ([`RoomNumber`], [`SeatNumber`], [`RoomSnapshot`],
//!   [`SeatAssignment`]) — identifiers and owned room copies.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how snapshots become
//!   bytes for machine-readable output.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while encoding.
//!
//! # Architecture
//!
//! ```text
//! Shell (text / JSON) → Protocol (ids, snapshots) ← Room registry
//! ```
//!
//! The protocol layer knows nothing about bookings. It only describes the
//! shapes that travel between the registry and whoever renders it.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{RoomNumber, RoomSnapshot, SeatAssignment, SeatNumber};

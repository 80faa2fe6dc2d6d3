//! # Roomledger
//!
//! An in-memory booking ledger for rooms and the numbered seats inside
//! them.
//!
//! The booking rules live in [`roomledger_room`]; this crate adds the
//! interactive [`Shell`], the command line, and a single error type that
//! wraps every layer's errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use roomledger::prelude::*;
//!
//! let mut registry = RoomRegistry::new();
//! let input = std::io::Cursor::new("1\nR1\nDana\n9:00\n10:00\n6\n");
//! let mut output: Vec<u8> = Vec::new();
//! Shell::new(&mut registry, input, &mut output).run()?;
//!
//! assert_eq!(registry.room_count(), 1);
//! # Ok::<(), LedgerError>(())
//! ```

mod cli;
mod error;
mod shell;

pub use cli::Cli;
pub use error::LedgerError;
pub use shell::{MENU, MenuChoice, OutputFormat, Shell};

/// Everything needed to drive a ledger session.
pub mod prelude {
    pub use crate::{LedgerError, OutputFormat, Shell};
    pub use roomledger_protocol::{RoomNumber, RoomSnapshot, SeatNumber};
    pub use roomledger_room::{
        BookingError, RegistryConfig, Room, RoomConfig, RoomRegistry,
        SharedRegistry,
    };
}

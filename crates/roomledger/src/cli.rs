//! Command line flags for the `roomledger` binary.

use clap::Parser;
use roomledger_room::{DEFAULT_MAX_CAPACITY, RegistryConfig, RoomConfig};

use crate::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "roomledger")]
#[command(about = "Interactive room and seat booking ledger")]
pub struct Cli {
    /// Notional number of seats in each room
    #[arg(long, env = "ROOMLEDGER_MAX_CAPACITY", default_value_t = DEFAULT_MAX_CAPACITY)]
    pub max_capacity: usize,

    /// Refuse bookings once a room has max-capacity seats taken
    #[arg(long, env = "ROOMLEDGER_ENFORCE_CAPACITY")]
    pub enforce_capacity: bool,

    /// Refuse to add a room whose number is already registered
    #[arg(long, env = "ROOMLEDGER_REJECT_DUPLICATES")]
    pub reject_duplicate_rooms: bool,

    /// Print displayed rooms as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            room: RoomConfig {
                max_capacity: self.max_capacity,
                enforce_capacity: self.enforce_capacity,
            },
            reject_duplicate_rooms: self.reject_duplicate_rooms,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

//! The interactive menu.
//!
//! `Shell` reads commands from any `BufRead` and writes to any `Write`, so
//! the same loop drives a terminal in `main` and a `Cursor` in tests. It
//! borrows the registry rather than owning it: whoever builds the shell
//! decides how the registry is configured and can inspect it afterwards.

use std::io::{BufRead, Write};
use std::str::FromStr;

use roomledger_protocol::{Codec, JsonCodec, RoomNumber, SeatNumber};
use roomledger_room::RoomRegistry;

use crate::LedgerError;

/// Printed before every prompt for a menu choice.
pub const MENU: &str = "\
---------- Room Booking System ----------
1. Add Room
2. Book Room
3. Release Room
4. Display Room
5. Display All Rooms
6. Exit
-----------------------------------------
";

// ---------------------------------------------------------------------------
// MenuChoice
// ---------------------------------------------------------------------------

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRoom,
    BookRoom,
    ReleaseRoom,
    DisplayRoom,
    DisplayAllRooms,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = LedgerError;

    /// Reads the choice as an integer, so `06` and `+2` pick entries 6
    /// and 2. Anything that isn't an integer in 1-6 is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || LedgerError::InvalidMenuChoice(trimmed.to_string());
        match trimmed.parse::<i32>().map_err(|_| invalid())? {
            1 => Ok(Self::AddRoom),
            2 => Ok(Self::BookRoom),
            3 => Ok(Self::ReleaseRoom),
            4 => Ok(Self::DisplayRoom),
            5 => Ok(Self::DisplayAllRooms),
            6 => Ok(Self::Exit),
            _ => Err(invalid()),
        }
    }
}

/// How display commands render rooms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The line-per-field listing from `Room`'s `Display` impl.
    #[default]
    Text,
    /// Pretty-printed JSON snapshots.
    Json,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// A menu-driven session over one registry.
pub struct Shell<'a, R, W> {
    registry: &'a mut RoomRegistry,
    input: R,
    output: W,
    format: OutputFormat,
    codec: JsonCodec,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell with text output.
    pub fn new(registry: &'a mut RoomRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            format: OutputFormat::Text,
            codec: JsonCodec,
        }
    }

    /// Sets how display commands render rooms.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Runs commands until the user picks Exit or input runs out.
    ///
    /// Mistakes in the input (unknown room, taken seat, bad menu number,
    /// non-numeric chair) are printed and the loop carries on.
    ///
    /// # Errors
    /// Returns [`LedgerError::Io`] if the terminal fails and
    /// [`LedgerError::Protocol`] if JSON encoding fails.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        tracing::debug!(format = ?self.format, "shell session started");

        loop {
            let flow = match self.step() {
                Ok(flow) => flow,
                Err(e) if !e.is_fatal() => {
                    writeln!(self.output, "{e}")?;
                    Flow::Continue
                }
                Err(e) => return Err(e),
            };
            if flow == Flow::Exit {
                break;
            }
            writeln!(self.output)?;
        }

        self.output.flush()?;
        tracing::debug!(rooms = self.registry.room_count(), "shell session ended");
        Ok(())
    }

    /// Shows the menu, reads one choice, and executes it.
    fn step(&mut self) -> Result<Flow, LedgerError> {
        self.output.write_all(MENU.as_bytes())?;
        let Some(line) = self.field("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };
        let choice: MenuChoice = line.parse()?;
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddRoom => self.add_room(),
            MenuChoice::BookRoom => self.book_room(),
            MenuChoice::ReleaseRoom => self.release_room(),
            MenuChoice::DisplayRoom => self.display_room(),
            MenuChoice::DisplayAllRooms => self.display_all_rooms(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add_room(&mut self) -> Result<Flow, LedgerError> {
        let Some(room_number) = self.field("Enter Room Number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(host) = self.field("Enter Host: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(start_time) = self.field("Enter Start Time: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(end_time) = self.field("Enter End Time: ")? else {
            return Ok(Flow::Exit);
        };

        let room = self.registry.add_room(room_number, host, start_time, end_time)?;
        writeln!(self.output, "Room {} added successfully", room.room_number())?;
        Ok(Flow::Continue)
    }

    fn book_room(&mut self) -> Result<Flow, LedgerError> {
        let Some(room_number) = self.field("Enter Room Number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(traveler) = self.field("Enter Traveler Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(seat) = self.seat()? else {
            return Ok(Flow::Exit);
        };

        let reservation = self
            .registry
            .book_room(&RoomNumber::from(room_number), traveler, seat)?;
        writeln!(
            self.output,
            "Chair {} has been booked for {}",
            reservation.seat, reservation.traveler
        )?;
        Ok(Flow::Continue)
    }

    fn release_room(&mut self) -> Result<Flow, LedgerError> {
        let Some(room_number) = self.field("Enter Room Number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(seat) = self.seat()? else {
            return Ok(Flow::Exit);
        };

        let release = self
            .registry
            .release_room(&RoomNumber::from(room_number), seat)?;
        writeln!(self.output, "Chair {} has been released", release.seat)?;
        Ok(Flow::Continue)
    }

    fn display_room(&mut self) -> Result<Flow, LedgerError> {
        let Some(room_number) = self.field("Enter Room Number: ")? else {
            return Ok(Flow::Exit);
        };

        let room = self.registry.display_room(&RoomNumber::from(room_number))?;
        match self.format {
            OutputFormat::Text => write!(self.output, "{room}")?,
            OutputFormat::Json => {
                let bytes = self.codec.encode(&room.snapshot())?;
                self.output.write_all(&bytes)?;
                writeln!(self.output)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn display_all_rooms(&mut self) -> Result<Flow, LedgerError> {
        match self.format {
            OutputFormat::Text => {
                for room in self.registry.display_all_rooms() {
                    write!(self.output, "{room}")?;
                }
            }
            OutputFormat::Json => {
                let bytes = self.codec.encode(&self.registry.snapshots())?;
                self.output.write_all(&bytes)?;
                writeln!(self.output)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompts for a chair number. A non-integer answer is an input error;
    /// `None` means input ran out.
    fn seat(&mut self) -> Result<Option<SeatNumber>, LedgerError> {
        let Some(line) = self.field("Enter Chair Number: ")? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        trimmed
            .parse::<i32>()
            .map(|n| Some(SeatNumber(n)))
            .map_err(|_| LedgerError::InvalidSeatNumber(trimmed.to_string()))
    }

    /// Writes `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn field(&mut self, prompt: &str) -> Result<Option<String>, LedgerError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

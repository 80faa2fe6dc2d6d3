use std::io;

use clap::Parser;
use roomledger::{Cli, LedgerError, Shell};
use roomledger_room::RoomRegistry;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), LedgerError> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.registry_config();
    tracing::info!(
        max_capacity = config.room.max_capacity,
        enforce_capacity = config.room.enforce_capacity,
        reject_duplicate_rooms = config.reject_duplicate_rooms,
        "starting room ledger"
    );

    let mut registry = RoomRegistry::with_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut registry, stdin.lock(), stdout.lock())
        .format(cli.output_format())
        .run()
}

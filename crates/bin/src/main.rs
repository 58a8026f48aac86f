use clap::Parser;
use kisan::{Store, persist::FileSlot};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, StorageArgs};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kisan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);
    let store = open_store(&cli.storage)?;

    match cli.command {
        Commands::Cart(command) => commands::cart::run(&store, command, format),
        Commands::Favorites(command) => commands::favorites::run(&store, command, format),
    }
}

/// Open the store in the configured data directory.
///
/// A snapshot that cannot be decoded is logged and replaced by an empty store;
/// the next change overwrites it.
fn open_store(args: &StorageArgs) -> Result<Store, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&args.data_dir)?;
    let slot = FileSlot::new(&args.data_dir, args.namespace.clone())?;
    tracing::debug!("Using snapshot file {}", slot.path().display());

    match Store::open(slot.clone()) {
        Ok(store) => Ok(store),
        Err(e) if e.is_corrupt_snapshot() => {
            tracing::warn!("Failed to load store snapshot: {e}. Starting with an empty store.");
            Ok(Store::empty(slot))
        }
        Err(e) => Err(e.into()),
    }
}

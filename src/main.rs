use clap::{Parser, Subcommand};
use fieldpack::index::{CompositeIndex, IndexBools};
use fieldpack::{LayoutError, Record};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Inspect and exercise fixed binary record layouts")]
struct App {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the field layout of the composite index record as JSON.
    Layout,
    /// Pack a 4-flag index and unpack it into a fresh record.
    Roundtrip,
}

fn main() -> Result<(), color_eyre::Report> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = App::parse();
    match app.command {
        Command::Layout => print_layout(),
        Command::Roundtrip => run_roundtrip(),
    }
}

fn print_layout() -> Result<(), color_eyre::Report> {
    let descriptors: Vec<_> = CompositeIndex::descriptors().collect();
    info!(size = CompositeIndex::size(), fields = descriptors.len(), "composite index");
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}

fn run_roundtrip() -> Result<(), color_eyre::Report> {
    let mut flags = IndexBools::<4>::new();
    flags.set::<0>([true, false, true, false]);
    let bytes = flags.pack().to_vec();
    info!(?bytes, "packed");

    let mut restored = IndexBools::<4>::new();
    restored.try_unpack(&bytes)?;
    info!(flags = ?restored.get::<0>(), "unpacked");

    // The same bytes do not fit a wider layout.
    let mut wider = Record::<([bool; 4], u32)>::new();
    if let Err(err @ LayoutError::LengthMismatch { .. }) = wider.try_unpack(&bytes) {
        info!(%err, "wider layout rejected");
    }
    Ok(())
}

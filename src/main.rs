//! ukmap - inspect, export and validate UK region map data
//!
//! This application exposes the map widget's data contract from the command
//! line: the map-wide settings, the sixteen UK regions, and export to the
//! JSON or JavaScript form the widget loads.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ukmap::cli::{
    CliResult, ConfigArgs, ExportArgs, RegionArgs, RegionsArgs, SettingsArgs, ValidateArgs,
};

/// ukmap - UK region map data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show map-wide settings
    Settings(SettingsArgs),
    /// List every region in declaration order
    Regions(RegionsArgs),
    /// Look up one region by code
    Region(RegionArgs),
    /// Export map data as JSON or as the widget's mapdata script
    Export(ExportArgs),
    /// Validate a map data file
    Validate(ValidateArgs),
    /// Manage tool configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Settings(args) => args.execute(),
            Self::Regions(args) => args.execute(),
            Self::Region(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}

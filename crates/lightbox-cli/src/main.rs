mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lightbox", about = "Article image collection tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show article metadata
    Info(commands::info::InfoArgs),
    /// List the image collection in document order
    Scan(commands::scan::ScanArgs),
    /// Check that every image in the collection loads
    Verify(commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Verify(args) => commands::verify::run(args),
    }
}

//! navgen CLI - Navigation sidebar generator.
//!
//! Provides commands for:
//! - `generate`: Rebuild the navigation file from the markdown headings
//! - `preview`: Print the generated entries without touching any file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, PreviewArgs};
use output::Output;

/// navgen - Navigation sidebar generator.
#[derive(Parser)]
#[command(name = "navgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the navigation file from the markdown source.
    Generate(GenerateArgs),
    /// Print the navigation entries to stdout.
    Preview(PreviewArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (ERROR only when unset)
    let verbose = match &cli.command {
        Commands::Generate(args) => args.verbose,
        Commands::Preview(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Preview(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

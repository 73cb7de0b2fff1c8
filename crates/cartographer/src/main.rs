//! Cartographer CLI - GitHub wiki sitemap generator.
//!
//! Provides commands for:
//! - `serve`: Start the webhook server
//! - `generate`: One-shot sitemap generation for a repository

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, ServeArgs};
use output::Output;

/// Cartographer - GitHub wiki sitemap generator.
#[derive(Parser)]
#[command(name = "cartographer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server.
    Serve(ServeArgs),
    /// Generate a sitemap once, without a webhook.
    Generate(GenerateArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the chosen command
    let verbose = match &cli.command {
        Commands::Serve(args) => args.verbose,
        Commands::Generate(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
        Commands::Generate(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

//! ngscaffold — Angular project scaffolder CLI.
//!
//! # Usage
//!
//! ```text
//! ngscaffold create <projectName>
//! ```
//!
//! Defaults for the registry questions and the Angular CLI pin can be set in
//! `~/.ngscaffold/config.yaml`. Set `RUST_LOG=debug` to see the exact
//! commands being run.

mod commands;
mod prompt;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::create::CreateArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "ngscaffold",
    version,
    about = "Angular Project Scaffolder CLI",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new Angular project.
    Create(CreateArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Create(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Project creation failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

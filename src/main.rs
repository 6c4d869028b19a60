// ABOUTME: Entry point for the cf-resource binary.
// ABOUTME: Parses arguments and dispatches to the check, in, and out handlers.

mod cli;
mod commands;

use clap::Parser;
use cf_resource::error::Result;
use cf_resource::output::{Output, OutputMode};
use cli::{Cli, Commands, multicall_args};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_from(multicall_args(std::env::args_os()));

    // RUST_LOG wins over the verbose flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli.command, mode).await {
        Output::new(mode).error(&format!("running command: {e}"));
        std::process::exit(1);
    }
}

async fn run(command: Commands, mode: OutputMode) -> Result<()> {
    let output = Output::new(mode);
    match command {
        Commands::Check => commands::check(output).await,
        Commands::In { destination } => commands::get(&destination, output).await,
        Commands::Out { sources } => commands::put(&sources, output).await,
    }
}

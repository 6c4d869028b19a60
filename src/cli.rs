// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the check, in, and out subcommands and multicall dispatch.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cf-resource")]
#[command(about = "Concourse resource for pushing apps to Cloud Foundry")]
#[command(version)]
pub struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report versions (always none)
    Check,

    /// Fetch a version
    #[command(name = "in")]
    In {
        /// Directory to fetch into
        destination: PathBuf,
    },

    /// Push the application
    Out {
        /// Directory holding the build's inputs
        sources: PathBuf,
    },
}

const SUBCOMMANDS: [&str; 3] = ["check", "in", "out"];

/// Support invocation through `check`, `in`, and `out` links to the binary.
///
/// When the program name is one of the subcommands, it is inserted as the
/// first argument so `/opt/resource/out /tmp/build` parses as `out /tmp/build`.
pub fn multicall_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    let invoked_as = args
        .first()
        .and_then(|program| Path::new(program).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| SUBCOMMANDS.contains(name))
        .map(OsString::from);

    if let Some(subcommand) = invoked_as {
        args.insert(1, subcommand);
    }
    args
}

//! Command-line interface.

pub mod output;
pub mod sync;

use std::path::PathBuf;

use clap::Parser;

/// Fanout - sync secrets and variables to many GitHub repositories.
#[derive(Parser, Debug)]
#[command(
    name = "fanout",
    about = "Sync secrets and variables from your environment to many GitHub repositories",
    version
)]
pub struct Cli {
    /// Resolve and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the configuration document (default: .fanout.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dotenv-style file whose entries take precedence over the process environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// File whose status block is rewritten after a clean live run
    #[arg(long, value_name = "PATH")]
    pub status_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Switch flags (no value).
const SWITCHES: [&str; 8] = [
    "--dry-run",
    "--verbose",
    "-v",
    "--json",
    "--help",
    "-h",
    "--version",
    "-V",
];

/// Flags that take a value in the following argument.
const VALUE_FLAGS: [&str; 4] = ["--config", "-c", "--env-file", "--status-file"];

/// Parse the process arguments, ignoring anything unrecognized.
pub fn parse_args() -> Cli {
    Cli::parse_from(recognized(std::env::args()))
}

/// Keep only arguments the CLI recognizes, so an unknown flag never
/// swallows or disables a later known one. Unknown flags are treated as
/// switches; their position does not matter.
fn recognized(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter();
    let mut kept: Vec<String> = Vec::new();

    // argv[0]
    kept.extend(args.next());

    while let Some(arg) = args.next() {
        let name = arg.split_once('=').map_or(arg.as_str(), |(n, _)| n);
        if SWITCHES.contains(&name) {
            kept.push(arg);
        } else if VALUE_FLAGS.contains(&name) {
            let inline_value = arg.contains('=');
            kept.push(arg);
            if !inline_value {
                kept.extend(args.next());
            }
        }
        // anything else is ignored
    }

    kept
}

/// Execute the sync run.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    sync::execute(&cli)
}

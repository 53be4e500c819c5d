//! Fanout - sync secrets and variables to many GitHub repositories.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fanout::cli::output;
use fanout::cli::{execute, parse_args};
use fanout::error::Error;

fn main() {
    let cli = parse_args();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("FANOUT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("fanout=debug")
        } else {
            EnvFilter::new("fanout=warn")
        }
    });

    // Logs go to stderr; stdout is reserved for the report.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::MissingToken => Some("export GH_TOKEN or GITHUB_TOKEN and retry"),
            Error::ConfigNotFound(_) => Some("create a .fanout.yml or pass --config <path>"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

//! local-chamber - A chamber-style secrets store on the local filesystem.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use local_chamber::cli::output;
use local_chamber::cli::{execute, Cli};
use local_chamber::error::{ArchiveError, Error, StoreError};

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    let filter = EnvFilter::try_from_env("LOCAL_CHAMBER_LOG").unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("local_chamber=debug")
        } else {
            EnvFilter::new("local_chamber=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Store(StoreError::NotFound(_)) => {
                Some("create the directory or pass --secrets-dir")
            }
            Error::Store(StoreError::ServiceNotFound(_)) => Some("run: local-chamber list-services"),
            Error::Archive(ArchiveError::PathTraversal { .. })
            | Error::Archive(ArchiveError::UnsupportedEntry { .. }) => {
                Some("the archive was rejected, nothing was restored")
            }
            Error::Archive(ArchiveError::OutputDir { .. }) => {
                Some("create the directory or pass --output-dir")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        if debug {
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}

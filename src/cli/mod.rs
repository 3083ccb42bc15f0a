//! Command-line interface.

pub mod archive;
pub mod completions;
pub mod exec;
pub mod output;
pub mod secrets;
pub mod transfer;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::format::Format;
use crate::core::store::Filesystem;
use crate::error::Result;

/// local-chamber - A chamber-style secrets store on the local filesystem.
#[derive(Parser)]
#[command(
    name = "local-chamber",
    about = "A chamber-style secrets store on the local filesystem",
    version
)]
pub struct Cli {
    /// Root directory of the secrets store [default: secrets]
    #[arg(short, long, global = true, env = "SECRETS_DIR")]
    pub secrets_dir: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a secret
    Write {
        /// Service name (e.g., db/prod)
        service: String,
        /// Secret key
        key: String,
        /// Secret value, or - to read it from stdin
        value: String,
    },

    /// Read a secret
    Read {
        /// Print only the value
        #[arg(short, long)]
        quiet: bool,
        /// Service name
        service: String,
        /// Secret key
        key: String,
    },

    /// Delete a secret
    Delete {
        /// Service name
        service: String,
        /// Secret key
        key: String,
    },

    /// List the secrets of a service
    List {
        /// Service name
        service: String,
    },

    /// List every service
    ListServices,

    /// Find secrets by key name or by value
    Find {
        /// Match values instead of key names
        #[arg(short = 'v', long)]
        by_value: bool,
        /// Key name or value to look for
        needle: String,
    },

    /// Print a service's secrets as shell export statements
    Env {
        /// Service name
        service: String,
    },

    /// Run a command with a service's secrets in its environment
    Exec {
        /// Service name
        service: String,
        /// Command and arguments to run
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Export a service's secrets
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Service name
        service: String,
    },

    /// Import secrets into a service from a JSON or YAML mapping
    Import {
        /// Service name
        service: String,
        /// Input file, or - for stdin
        #[arg(default_value = "-")]
        file: String,
    },

    /// Back up every service to a tar.gz archive
    Backup {
        /// Directory to write the archive to [default: .]
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Archive file name [default: <label>.tgz]
        #[arg(short = 'f', long)]
        file_name: Option<String>,
    },

    /// Restore secrets from a tar.gz archive
    Restore {
        /// Archive to restore from
        tarball: PathBuf,
        /// Keep secrets that are not in the archive
        #[arg(long)]
        patch: bool,
        /// Do not ask before replacing the store
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Run a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let open = || Filesystem::open(config.secrets_dir(cli.secrets_dir.clone()));

    match cli.command {
        Command::Write {
            service,
            key,
            value,
        } => secrets::write(&mut open()?, &service, &key, &value),
        Command::Read {
            quiet,
            service,
            key,
        } => secrets::read(&open()?, &service, &key, quiet),
        Command::Delete { service, key } => secrets::delete(&mut open()?, &service, &key),
        Command::List { service } => secrets::list(&open()?, &service),
        Command::ListServices => secrets::list_services(&open()?),
        Command::Find { by_value, needle } => secrets::find(&open()?, &needle, by_value),
        Command::Env { service } => transfer::env(&open()?, &service),
        Command::Exec { service, command } => exec::execute(&open()?, &service, &command),
        Command::Export {
            output,
            format,
            service,
        } => transfer::export(&open()?, &service, format, output.as_deref()),
        Command::Import { service, file } => transfer::import(&mut open()?, &service, &file),
        Command::Backup {
            output_dir,
            file_name,
        } => archive::backup(&open()?, &config.backup_dir(output_dir), file_name.as_deref()),
        Command::Restore {
            tarball,
            patch,
            yes,
        } => archive::restore(&mut open()?, &tarball, patch, yes),
        Command::Completions { shell } => completions::execute(shell),
    }
}

//! Moving a service's secrets in and out (env, export, import).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::format::{self, Format};
use crate::core::store::{Filesystem, Store};
use crate::error::Result;

/// Print a service's secrets as `export KEY=value` lines.
pub fn env(store: &Filesystem, service: &str) -> Result<()> {
    let secrets = store.secrets_of(service)?;
    println!("{}", format::render_env(&secrets));
    Ok(())
}

/// Export a service's secrets to stdout or a file.
pub fn export(store: &Filesystem, service: &str, fmt: Format, dest: Option<&Path>) -> Result<()> {
    let secrets = store.secrets_of(service)?;
    let rendered = format::render(&secrets, fmt)?;
    debug!(service, format = %fmt, secrets = secrets.len(), "exporting");

    match dest {
        Some(path) if path != Path::new("-") => {
            fs::write(path, format!("{}\n", rendered.trim_end()))?;
            output::success(&format!(
                "exported {} secrets to {}",
                secrets.len(),
                output::path(path.display())
            ));
        }
        _ => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

/// Import a JSON or YAML mapping from `file`, or stdin when `file` is `-`.
pub fn import(store: &mut Filesystem, service: &str, file: &str) -> Result<()> {
    let input = if file == "-" {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        fs::read_to_string(file)?
    };

    let count = format::import(store, service, &input)?;
    output::success(&format!("imported {} secrets into {}", count, service));
    Ok(())
}

//! Secret management commands (write, read, delete, list, list-services, find).

use std::io::{self, Read};

use tracing::info;

use crate::cli::output;
use crate::core::find;
use crate::core::store::{Filesystem, SecretInfo, Store};
use crate::error::Result;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn modified(info: &SecretInfo) -> String {
    info.modified.format(TIME_FORMAT).to_string()
}

/// Write a secret; a value of `-` is read from stdin.
pub fn write(store: &mut Filesystem, service: &str, key: &str, value: &str) -> Result<()> {
    let value = if value == "-" {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        value.to_string()
    };

    store.write(service, key, &value)?;
    info!(service, key, "secret written");
    output::success(&format!("wrote {} {}", service, output::key(key)));
    Ok(())
}

/// Read a secret as a table row, or the bare value with `quiet`.
pub fn read(store: &Filesystem, service: &str, key: &str, quiet: bool) -> Result<()> {
    let info = store.read(service, key)?;
    if quiet {
        println!("{}", info.value);
        return Ok(());
    }

    output::table(
        &["Key", "Value", "Version", "LastModified", "User"],
        &[vec![
            info.key.clone(),
            info.value.clone(),
            info.version.to_string(),
            modified(&info),
            whoami::username(),
        ]],
    );
    Ok(())
}

/// Delete a secret.
pub fn delete(store: &mut Filesystem, service: &str, key: &str) -> Result<()> {
    store.delete(service, key)?;
    output::success(&format!("deleted {} {}", service, output::key(key)));
    Ok(())
}

/// List a service's secrets with their metadata.
pub fn list(store: &Filesystem, service: &str) -> Result<()> {
    let user = whoami::username();
    let rows: Vec<Vec<String>> = store
        .list(service)?
        .iter()
        .map(|info| {
            vec![
                info.key.clone(),
                info.version.to_string(),
                modified(info),
                user.clone(),
            ]
        })
        .collect();

    output::table(&["Key", "Version", "LastModified", "User"], &rows);
    Ok(())
}

/// Print every service, one per line.
pub fn list_services(store: &Filesystem) -> Result<()> {
    for service in store.list_services()? {
        println!("{}", service);
    }
    Ok(())
}

/// Find services holding a key, or secrets holding a value.
pub fn find(store: &Filesystem, needle: &str, by_value: bool) -> Result<()> {
    let matches = find::find(store, needle, by_value)?;
    if by_value {
        let rows: Vec<Vec<String>> = matches
            .into_iter()
            .map(|m| vec![m.service, m.key])
            .collect();
        output::table(&["Service", "Key"], &rows);
    } else {
        let rows: Vec<Vec<String>> = matches.into_iter().map(|m| vec![m.service]).collect();
        output::table(&["Service"], &rows);
    }
    Ok(())
}

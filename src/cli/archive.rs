//! Backup and restore commands.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Confirm;

use crate::cli::output;
use crate::core::archive::{Backup, Restore};
use crate::core::store::{Filesystem, Store};
use crate::error::Result;

/// Back up every service and print the archive path.
pub fn backup(store: &Filesystem, output_dir: &Path, file_name: Option<&str>) -> Result<()> {
    let tarball = Backup::new(output_dir, file_name)?.write(store)?;
    println!("{}", tarball.display());
    Ok(())
}

/// Restore the store from `tarball` and print a summary.
///
/// A full restore deletes every existing secret, so on an interactive
/// terminal it asks first unless `yes` is set.
pub fn restore(store: &mut Filesystem, tarball: &Path, patch: bool, yes: bool) -> Result<()> {
    if !patch && !yes && io::stdin().is_terminal() && !confirm(store)? {
        output::warn("restore aborted");
        return Ok(());
    }

    let summary = Restore::new(tarball, patch).read(store)?;
    println!("{}", summary);
    Ok(())
}

fn confirm(store: &Filesystem) -> Result<bool> {
    let services = store.list_services()?.len();
    if services == 0 {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Replace all {} service{} in {}?",
            services,
            if services == 1 { "" } else { "s" },
            output::path(store.root().display())
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

//! Exec command.
//!
//! Runs a command with a service's secrets injected as environment variables.

use zeroize::Zeroizing;

use crate::core::store::{Filesystem, Store};
use crate::error::{Error, Result};

/// Run `command` with the secrets of `service` and exit with its status.
pub fn execute(store: &Filesystem, service: &str, command: &[String]) -> Result<()> {
    let exit_code = run_with_secrets(store, service, command)?;
    std::process::exit(exit_code);
}

fn run_with_secrets(store: &Filesystem, service: &str, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    // Each value read from the store is zeroed on drop. The copy held by
    // `cmd` for the child's environment is not.
    for (key, value) in store.secrets_of(service)? {
        let value = Zeroizing::new(value);
        cmd.env(key, value.as_str());
    }

    let status = cmd.status()?;
    // Killed by a signal: no code, report failure.
    Ok(status.code().unwrap_or(1))
}

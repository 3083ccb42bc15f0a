//! Rendering and parsing of a service's secrets.
//!
//! Export supports the chamber formats; import accepts
//! JSON or YAML mappings.

use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::core::store::Store;
use crate::core::types::Secrets;
use crate::error::{Error, Result};

/// Output format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Compact JSON object (the canonical format)
    #[default]
    Json,
    /// YAML mapping
    Yaml,
    /// `key,value` lines
    Csv,
    /// `key<TAB>value` lines
    Tsv,
    /// `KEY="value"` lines
    Dotenv,
    /// Terraform `key = "value"` lines
    Tfvars,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Dotenv => "dotenv",
            Format::Tfvars => "tfvars",
        };
        f.write_str(name)
    }
}

/// Wrap `value` in double quotes if it contains any of `delims`.
fn quote(value: &str, delims: &[char]) -> String {
    if value.contains(delims) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// One line per secret, joined with `\n`.
fn lines(secrets: &Secrets, line: impl Fn(&str, &str) -> String) -> String {
    secrets
        .iter()
        .map(|(k, v)| line(k, v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render secrets in the given format.
///
/// Line-oriented formats have no trailing newline.
pub fn render(secrets: &Secrets, format: Format) -> Result<String> {
    let out = match format {
        Format::Json => serde_json::to_string(secrets)?,
        Format::Yaml => serde_yaml::to_string(secrets)?,
        Format::Csv => lines(secrets, |k, v| format!("{},{}", k, quote(v, &[' ', ',']))),
        Format::Tsv => lines(secrets, |k, v| format!("{}\t{}", k, quote(v, &[' ']))),
        Format::Dotenv => lines(secrets, |k, v| {
            format!("{}=\"{}\"", k.to_uppercase(), v)
        }),
        Format::Tfvars => lines(secrets, |k, v| format!("{} = \"{}\"", k, v)),
    };
    Ok(out)
}

/// Render secrets as shell `export` statements.
///
/// Keys are upper-cased; values containing a space are double-quoted.
pub fn render_env(secrets: &Secrets) -> String {
    lines(secrets, |k, v| {
        format!("export {}={}", k.to_uppercase(), quote(v, &[' ']))
    })
}

/// Parse a JSON or YAML mapping of key to value.
///
/// # Errors
///
/// Returns the YAML error if the input is neither valid JSON nor YAML.
pub fn parse(input: &str) -> Result<Secrets> {
    match serde_json::from_str(input) {
        Ok(secrets) => Ok(secrets),
        Err(json_err) => {
            debug!(error = %json_err, "input is not JSON, trying YAML");
            serde_yaml::from_str(input).map_err(Error::from)
        }
    }
}

/// Import a JSON or YAML mapping into `service`.
///
/// # Returns
///
/// Number of secrets written.
pub fn import(store: &mut dyn Store, service: &str, input: &str) -> Result<usize> {
    let secrets = parse(input)?;
    for (key, value) in &secrets {
        store.write(service, key, value)?;
    }
    Ok(secrets.len())
}

use bidict::{OnDup, OrderedBidict, ON_DUP_DEFAULT, ON_DUP_OVERWRITE, ON_DUP_RAISE};
use clap::{Subcommand, ValueEnum};

use crate::errors::CliError;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value associated with a key.
    Get { key: String },
    /// Print the key associated with a value.
    GetByValue { value: String },
    /// Print the inverse mapping as a JSON object.
    Invert,
    /// Check that the pairs form a one-to-one mapping under the chosen policy.
    Check,
}

/// How colliding pairs in the input are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Later pairs replace the value of an earlier key; a repeated value is an error.
    Default,
    /// Any repeated key or value is an error.
    Raise,
    /// Later pairs evict every earlier pair they collide with.
    Overwrite,
}

impl From<Policy> for OnDup {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Default => ON_DUP_DEFAULT,
            Policy::Raise => ON_DUP_RAISE,
            Policy::Overwrite => ON_DUP_OVERWRITE,
        }
    }
}

pub fn build(pairs: Vec<(String, String)>, policy: Policy) -> Result<OrderedBidict<String, String>, CliError> {
    let mut bidict: OrderedBidict<String, String> = OrderedBidict::with_on_dup(policy.into());
    if let Err(err) = bidict.update(pairs) {
        log::error!("[Command] input is not one-to-one: {err}");
        return Err(err.into());
    }
    Ok(bidict)
}

/// Runs `command` over `pairs` and returns what should be printed.
pub fn run(command: &Command, pairs: Vec<(String, String)>, policy: Policy) -> Result<String, CliError> {
    let bidict = build(pairs, policy)?;
    log::info!("[Command] loaded {} items", bidict.len());
    match command {
        Command::Get { key } => bidict.try_get(key).cloned().map_err(|err| {
            log::warn!("[Command] key {key:?} not found");
            err.into()
        }),
        Command::GetByValue { value } => bidict.inverse().try_get(value).cloned().map_err(|err| {
            log::warn!("[Command] value {value:?} not found");
            err.into()
        }),
        Command::Invert => serde_json::to_string_pretty(&bidict.into_inverse()).map_err(|e| {
            log::error!("[Command] cannot encode inverse: {e}");
            CliError::OutputFailed
        }),
        Command::Check => Ok(format!("ok ({} items)", bidict.len())),
    }
}

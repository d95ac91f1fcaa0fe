//! Runtime configuration.
//!
//! Values come from the command line (optional script path) and the
//! environment:
//!
//! - `BANK_HOLDER`: account holder name (default `John Doe`)
//! - `BANK_INITIAL_BALANCE`: starting balance, any sign (default `100`)
//! - `BANK_NOTIFY`: `1`, `true`, `yes` or `on` attaches the log notifier (default off)
//! - `BANK_LOG`: log filter used when `RUST_LOG` is unset (default `info`)

use std::env;
use std::path::PathBuf;

use crate::domain::{Error, Money};

pub const DEFAULT_HOLDER: &str = "John Doe";
pub const DEFAULT_INITIAL_BALANCE: i64 = 100;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV script to replay. `None` replays the built-in sample session.
    pub script: Option<PathBuf>,
    pub holder: String,
    pub initial_balance: Money,
    pub notify: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self, Error> {
        Self::from_lookup(args, |key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(args: impl IntoIterator<Item = String>, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter().skip(1);
        let script = args.next().map(PathBuf::from);
        if let Some(extra) = args.next() {
            return Err(Error::Config {
                key: "args".to_string(),
                message: format!("unexpected argument {:?}", extra),
            });
        }

        let holder = lookup("BANK_HOLDER").unwrap_or_else(|| DEFAULT_HOLDER.to_string());

        let initial_balance = match lookup("BANK_INITIAL_BALANCE") {
            Some(value) => value.parse::<Money>().map_err(|e| Error::Config {
                key: "BANK_INITIAL_BALANCE".to_string(),
                message: e.to_string(),
            })?,
            None => Money::from(DEFAULT_INITIAL_BALANCE),
        };

        let notify = match lookup("BANK_NOTIFY") {
            Some(value) => parse_flag("BANK_NOTIFY", &value)?,
            None => false,
        };

        let log_level = lookup("BANK_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            script,
            holder,
            initial_balance,
            notify,
            log_level,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config {
            key: key.to_string(),
            message: format!("expected a boolean, got {:?}", other),
        }),
    }
}

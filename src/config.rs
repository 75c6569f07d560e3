// Runtime configuration read from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default directory holding save files.
pub const DEFAULT_SAVES_DIR: &str = "saves";

/// Records shown per page by the pager.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How long a message stays on screen before the menu is redrawn.
pub const DEFAULT_PAUSE_MS: u64 = 800;

/// Configuration for a phone book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that `save` writes to and `load` lists
    pub saves_dir: PathBuf,

    /// Records per page in `read` and `find`
    pub page_size: usize,

    /// Pause after a reported error
    pub pause: Duration,

    /// Log filter used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_SAVES_DIR`: save directory (default: `saves`)
    /// - `PHONEBOOK_PAGE_SIZE`: records per page (default: 10)
    /// - `PHONEBOOK_PAUSE_MS`: message pause in milliseconds (default: 800)
    /// - `PHONEBOOK_LOG`: log filter (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let saves_dir = lookup("PHONEBOOK_SAVES_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVES_DIR));

        let page_size = parse_var(&lookup, "PHONEBOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let pause_ms = parse_var(&lookup, "PHONEBOOK_PAUSE_MS", DEFAULT_PAUSE_MS)?;
        let log_level = lookup("PHONEBOOK_LOG").unwrap_or_else(|| "error".to_string());

        Ok(Config {
            saves_dir,
            page_size,
            pause: Duration::from_millis(pause_ms),
            log_level,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, default: T) -> ConfigResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var_name) {
        Some(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a positive number, got: {}", val),
        }),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            saves_dir: PathBuf::from(DEFAULT_SAVES_DIR),
            page_size: DEFAULT_PAGE_SIZE,
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
            log_level: "error".to_string(),
        }
    }
}

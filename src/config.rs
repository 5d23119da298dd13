//! Configuration management for the contact book.
//!
//! Settings come from environment variables, after an optional `.env` file
//! has been loaded.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default address book location, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address book file (default: "address_book.json")
    pub book_path: PathBuf,

    /// Save after every successful mutation (default: true)
    pub autosave: bool,

    /// Window for upcoming birthdays in days (default: 7)
    pub upcoming_birthday_days: i64,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Address book file (default: "address_book.json")
    /// - `CONTACT_BOOK_AUTOSAVE`: `true` or `false` (default: true)
    /// - `UPCOMING_BIRTHDAY_DAYS`: Birthday window, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let autosave = Self::parse_env_bool("CONTACT_BOOK_AUTOSAVE", true)?;
        let upcoming_birthday_days = Self::parse_env_i64("UPCOMING_BIRTHDAY_DAYS", 7)?;

        if !(1..=366).contains(&upcoming_birthday_days) {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            autosave,
            upcoming_birthday_days,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            autosave: true,
            upcoming_birthday_days: 7,
            log_level: "warn".to_string(),
        }
    }
}

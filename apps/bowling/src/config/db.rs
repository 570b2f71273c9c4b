use std::time::Duration;

use super::{env_lookup, optional_var};
use crate::error::AppError;

pub const LOCK_TIMEOUT_VAR: &str = "BOWLING_LOCK_TIMEOUT_MS";
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Settings for the roll store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// How long a roll submission waits for the player's write lock.
    pub lock_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let lock_timeout = match optional_var(&lookup, LOCK_TIMEOUT_VAR) {
            None => DEFAULT_LOCK_TIMEOUT,
            Some(raw) => parse_timeout_ms(&raw)?,
        };
        Ok(Self { lock_timeout })
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(AppError::config(format!(
            "{LOCK_TIMEOUT_VAR} must be a positive integer (milliseconds), got '{raw}'"
        ))),
    }
}

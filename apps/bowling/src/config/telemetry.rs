use super::{env_lookup, optional_var};
use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "BOWLING_LOG_FORMAT";

/// Output format for the process-wide tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let Some(raw) = optional_var(&lookup, LOG_FORMAT_VAR) else {
            return Ok(Self::default());
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

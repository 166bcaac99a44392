//! Process configuration, read from the environment.

use hello_functions_guest::{Error, InvocationError};
use hello_functions_log::LogMode;
use log::LevelFilter;

use crate::GreetingStyle;

pub const GREETING_STYLE_VAR: &str = "HELLO_WORLD_GREETING_STYLE";
pub const LOG_LEVEL_VAR: &str = "HELLO_WORLD_LOG_LEVEL";
pub const LOG_STREAM_VAR: &str = "HELLO_WORLD_LOG_STREAM";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// A broken environment is not the caller's fault.
impl From<&ConfigError> for Error {
    fn from(e: &ConfigError) -> Self {
        Error::InvocationError(InvocationError::InternalError(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreeterConfig {
    pub style: GreetingStyle,
    pub log_level: LevelFilter,
    pub log_mode: LogMode,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            style: GreetingStyle::Compatible,
            log_level: LevelFilter::Info,
            log_mode: LogMode::Stderr,
        }
    }
}

impl GreeterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(GREETING_STYLE_VAR) {
            config.style = match value.trim().to_ascii_lowercase().as_str() {
                "compatible" => GreetingStyle::Compatible,
                "corrected" => GreetingStyle::Corrected,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: GREETING_STYLE_VAR,
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            config.log_level = match value.trim().parse() {
                Ok(level) => level,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: LOG_LEVEL_VAR,
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup(LOG_STREAM_VAR) {
            config.log_mode = match value.trim().to_ascii_lowercase().as_str() {
                "stderr" => LogMode::Stderr,
                "stdout" => LogMode::Stdout,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: LOG_STREAM_VAR,
                        value,
                    });
                }
            };
        }
        Ok(config)
    }
}

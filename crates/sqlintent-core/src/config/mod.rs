//! Key/value configuration readers
//!
//! Handles are passed explicitly to whoever needs them; there is no global
//! instance.

mod ops;
mod txt;

pub use ops::OpsConfig;
pub use txt::TxtConfig;

use crate::error::ConfigError;

/// Values accepted as "true" (case-insensitive); anything else is false
const TRUE_VALUES: [&str; 6] = ["1", "on", "true", "yes", "enable", "enabled"];

/// Typed access to string-valued configuration entries
pub trait Config {
    /// Raw value for `key`
    fn get_string(&self, key: &str) -> Result<String, ConfigError>;

    /// All entries, one `key: value` line each
    fn dump(&self) -> String;

    fn get_or_default_string(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.get_string(key)?;
        value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        })
    }

    fn get_or_default_int(&self, key: &str, default: i64) -> i64 {
        self.get_int(key).unwrap_or(default)
    }

    fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        let value = self.get_string(key)?;
        Ok(parse_switch(&value))
    }

    fn get_or_default_bool(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// True only when the key is present with a true value
    fn is_switch_enabled(&self, key: &str) -> bool {
        self.get_or_default_bool(key, false)
    }
}

fn parse_switch(value: &str) -> bool {
    TRUE_VALUES
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}

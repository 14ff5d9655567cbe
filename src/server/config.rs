//! Environment-driven configuration.

use crate::server::error::config::ConfigError;

/// Default listen address when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Default session lifetime on inactivity, in days.
pub const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;
/// Largest accepted session lifetime on inactivity, in days.
pub const MAX_SESSION_INACTIVITY_DAYS: i64 = 3650;

/// Runtime configuration read from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SeaORM connection URL for the user store
    pub database_url: String,
    /// Valkey/Redis URL backing the session store
    pub valkey_url: String,
    /// Socket address the HTTP server listens on
    pub bind_address: String,
    /// Days of inactivity after which a session expires
    pub session_inactivity_days: i64,
    /// Whether login rejects passwords shorter than the registration minimum
    /// before verifying them
    pub login_enforce_password_length: bool,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            session_inactivity_days: match optional("SESSION_INACTIVITY_DAYS") {
                Some(value) => parse_days("SESSION_INACTIVITY_DAYS", &value)?,
                None => DEFAULT_SESSION_INACTIVITY_DAYS,
            },
            login_enforce_password_length: match optional("LOGIN_ENFORCE_PASSWORD_LENGTH") {
                Some(value) => parse_bool("LOGIN_ENFORCE_PASSWORD_LENGTH", &value)?,
                None => true,
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parse_days(var: &str, value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(days) if (1..=MAX_SESSION_INACTIVITY_DAYS).contains(&days) => Ok(days),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!(
                "expected between 1 and {} days, got {:?}",
                MAX_SESSION_INACTIVITY_DAYS, value
            ),
        }),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected true or false, got {:?}", value),
        }),
    }
}

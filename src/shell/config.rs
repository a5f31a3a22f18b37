// Process configuration.
//
// Read from the environment (after an optional .env file) once at startup.
// Only TOKEN_SECRET is required; everything else has a default.

use chrono::Duration;
use serde::Deserialize;
use thiserror::Error;

use crate::shared::core::clock::WorkCalendar;

pub const IN_MEMORY_DATABASE: &str = ":memory:";
pub const MIN_SECRET_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("TOKEN_SECRET must be at least 16 bytes")]
    SecretTooShort,

    #[error("HR_BOOTSTRAP_NAME and HR_BOOTSTRAP_PIN must be set together")]
    PartialBootstrap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    pub token_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u32,
    #[serde(default)]
    pub utc_offset_minutes: i32,
    pub hr_bootstrap_name: Option<String>,
    pub hr_bootstrap_pin: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_path() -> String {
    "./timesheets.db".to_string()
}

fn default_token_ttl_hours() -> u32 {
    12
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, ConfigError> {
        let config: Config = envy::from_iter(vars)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort);
        }
        if self.hr_bootstrap_name.is_some() != self.hr_bootstrap_pin.is_some() {
            return Err(ConfigError::PartialBootstrap);
        }
        Ok(self)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_in_memory_database(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::hours(i64::from(self.token_ttl_hours))
    }

    pub fn calendar(&self) -> WorkCalendar {
        WorkCalendar::from_offset_minutes(self.utc_offset_minutes)
    }

    /// Name and PIN of the HR account to create at startup, when configured.
    pub fn hr_bootstrap(&self) -> Option<(&str, &str)> {
        Some((
            self.hr_bootstrap_name.as_deref()?,
            self.hr_bootstrap_pin.as_deref()?,
        ))
    }
}

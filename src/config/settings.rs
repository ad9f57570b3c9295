//! Process settings from environment (a `.env` file is loaded by the binaries first).

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub database_timeout: Duration,
}

/// Connection settings once both database variables are present.
#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match get("DATABASE_TIMEOUT_SECS") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "DATABASE_TIMEOUT_SECS",
                value: v,
            })?,
            None => DEFAULT_DATABASE_TIMEOUT_SECS,
        };
        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            database_url: get("DATABASE_URL"),
            database_name: get("DATABASE_NAME"),
            database_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn database(&self) -> Result<DatabaseSettings, ConfigError> {
        let url = self.database_url.clone().ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let name = self.database_name.clone().ok_or(ConfigError::Missing("DATABASE_NAME"))?;
        Ok(DatabaseSettings {
            url,
            name,
            timeout: self.database_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

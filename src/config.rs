use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::db::PoolSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool: PoolSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PoolSettings::default();

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let max_size = parse_or(&lookup, "DB_POOL_MAX_SIZE", defaults.max_size)?;
        if max_size == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_POOL_MAX_SIZE",
                value: "0".to_string(),
            });
        }
        let connect_secs = parse_or(
            &lookup,
            "DB_CONNECT_TIMEOUT_SECS",
            defaults.connection_timeout.as_secs(),
        )?;
        let statement_ms = parse_or(
            &lookup,
            "DB_STATEMENT_TIMEOUT_MS",
            defaults.statement_timeout.as_millis() as u64,
        )?;

        Ok(Self {
            database_url,
            host,
            port,
            pool: PoolSettings {
                max_size,
                connection_timeout: Duration::from_secs(connect_secs),
                statement_timeout: Duration::from_millis(statement_ms),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

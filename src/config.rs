//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment yields a
//! working local server.

use crate::domain::PhoneRegion;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (default: "sqlite:contacts.db?mode=rwc")
    pub database_url: String,

    /// Connection pool size (default: 5)
    pub db_max_connections: u32,

    /// Interface to bind (default: 127.0.0.1)
    pub bind_host: IpAddr,

    /// TCP port (default: 3000)
    pub port: u16,

    /// Region phone numbers must be mobile numbers in (default: id-ID)
    pub phone_region: PhoneRegion,

    /// How long an unread notification survives, in seconds (default: 6)
    pub flash_ttl_seconds: u64,

    /// Log filter used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DATABASE_URL`: SQLite URL, must start with `sqlite:`
    /// - `DB_MAX_CONNECTIONS`: pool size, at least 1 (default: 5)
    /// - `BIND_HOST`: IP address to listen on (default: 127.0.0.1)
    /// - `PORT`: TCP port (default: 3000)
    /// - `PHONE_REGION`: one of id-ID, ms-MY, en-US, en-GB (default: id-ID)
    /// - `FLASH_TTL_SECONDS`: notification lifetime, at least 1 (default: 6)
    /// - `LOG_LEVEL`: logging filter (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_URL".to_string(),
                reason: "Must start with sqlite:".to_string(),
            });
        }

        let db_max_connections =
            Self::parse_env_u32("DB_MAX_CONNECTIONS", defaults.db_max_connections)?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let bind_host = match env::var("BIND_HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.bind_host,
        };

        let port = Self::parse_env_u16("PORT", defaults.port)?;

        let phone_region = match env::var("PHONE_REGION") {
            Ok(val) => val
                .parse::<PhoneRegion>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "PHONE_REGION".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => defaults.phone_region,
        };

        let flash_ttl_seconds = Self::parse_env_u64("FLASH_TTL_SECONDS", defaults.flash_ttl_seconds)?;
        if flash_ttl_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                var: "FLASH_TTL_SECONDS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            database_url,
            db_max_connections,
            bind_host,
            port,
            phone_region,
            flash_ttl_seconds,
            log_level,
        })
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    pub fn flash_ttl(&self) -> Duration {
        Duration::from_secs(self.flash_ttl_seconds)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite:contacts.db?mode=rwc".to_string(),
            db_max_connections: 5,
            bind_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            phone_region: PhoneRegion::IdId,
            flash_ttl_seconds: 6,
            log_level: "info".to_string(),
        }
    }
}

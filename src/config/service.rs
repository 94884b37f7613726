//! Settings for the HTTP service, read from the process environment.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Origins allowed to call the API when `APP_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5500",
    "http://127.0.0.1:5500",
    "http://localhost:8080",
];

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Origins permitted by the CORS policy.
    pub allowed_origins: Vec<String>,
    /// Optional YAML file replacing the built-in tax year.
    pub tax_year_config: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            tax_year_config: None,
        }
    }
}

impl ServiceConfig {
    /// Reads settings from the environment, loading `.env` first if present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `APP_HOST` | `0.0.0.0` |
    /// | `APP_PORT` | `8000` |
    /// | `APP_LOG_LEVEL` | `info` |
    /// | `APP_ALLOWED_ORIGINS` | the four local development origins |
    /// | `APP_TAX_YEAR_CONFIG` | unset (built-in 2025-2026) |
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| EngineError::InvalidConfig {
                    key: "APP_PORT".to_string(),
                    message: format!("'{}' is not a valid port", raw),
                })?,
            None => defaults.port,
        };

        let allowed_origins = match lookup("APP_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.allowed_origins,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("APP_LOG_LEVEL").unwrap_or(defaults.log_level),
            allowed_origins,
            tax_year_config: lookup("APP_TAX_YEAR_CONFIG").map(PathBuf::from),
        })
    }

    /// Resolves the bind address.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|_| EngineError::InvalidConfig {
            key: "APP_HOST".to_string(),
            message: format!("'{}' is not an IPv4 or IPv6 address", self.host),
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 2;
const DEFAULT_RATE_LIMIT_BURST: u32 = 30;

pub struct Config {
    pub database_url: String,
    /// HS256 secret shared with the identity provider that issues bearer tokens.
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,
    /// Allowed browser origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,
    /// Sustained requests per second allowed per client IP on `/api`.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_addr: parsed("BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty()),
            rate_limit_per_second: parsed(
                "RATE_LIMIT_PER_SECOND",
                Some(DEFAULT_RATE_LIMIT_PER_SECOND),
            )?,
            rate_limit_burst: parsed("RATE_LIMIT_BURST", Some(DEFAULT_RATE_LIMIT_BURST))?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parsed<T: FromStr>(name: &str, default: Option<T>) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}

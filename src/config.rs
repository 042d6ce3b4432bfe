//! Environment-backed settings. The caller seeds the process environment from
//! a .env file (dotenvy) before loading.

use crate::error::AppError;

/// Kept low; this is a small catalog service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Settings {
    /// Read settings from `DATABASE_URL`, `BIND_ADDR` and `MAX_CONNECTIONS`.
    /// Missing variables fall back to local defaults; a malformed
    /// `MAX_CONNECTIONS` is an error rather than a silent default.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/bookstore".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| {
                AppError::Config(format!("MAX_CONNECTIONS must be an integer, got '{}'", v))
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

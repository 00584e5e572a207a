//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Server configuration parameters.
///
/// Everything except the database URL has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string (required)
    pub database_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached note reads
    pub cache_ttl: u64,
    /// Requests admitted per rate-limit window
    pub rate_limit_max_requests: u32,
    /// Rate-limit window length in seconds
    pub rate_limit_window_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite connection string (required; startup is
    ///   aborted when missing)
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    /// - `CACHE_TTL` - Cached read TTL in seconds (default: 59)
    /// - `RATE_LIMIT_MAX_REQUESTS` - Admitted requests per window (default: 20)
    /// - `RATE_LIMIT_WINDOW_SECS` - Window length in seconds (default: 60)
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .context("DATABASE_URL environment variable is not defined")?;

        Ok(Self {
            database_url,
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5001),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(59),
            rate_limit_max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }
}

//! Application configuration loading from environment variables.
//!
//! All configuration is read from the environment at startup (optionally seeded from a
//! `.env` file by `dotenvy`).
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `DATABASE_URL`: SQLite connection string (e.g. `sqlite://./blog.db`)
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,blog=debug")
//! - `DATABASE_MAX_CONNECTIONS`: DB pool size (default: 5)
//! - `DATABASE_ACQUIRE_TIMEOUT_MS`: Upper bound on waiting for a connection or transaction (default: 5000)
//! - `LEDGER_BUSY_RETRIES`: Extra attempts when the store reports it is busy (default: 3)
//! - `LEDGER_RETRY_BACKOFF_MS`: Base delay between those attempts (default: 25)
//! - `SEED_DEMO_DATA`: Insert demo users and articles into an empty store (default: true)
//! - `IGNORE_MISSING_MIGRATIONS`: Skip missing migrations (default: true)

use serde::Deserialize;
use std::time::Duration;

/// Complete process configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SQLite connection string
    pub database_url: String,

    /// Maximum number of pooled connections
    pub database_max_connections: u32,

    /// Milliseconds to wait for a pooled connection or a new transaction
    pub database_acquire_timeout_ms: u64,

    /// Additional attempts of a ledger unit of work after a busy/locked store
    pub ledger_busy_retries: u32,

    /// Base backoff in milliseconds, multiplied by the attempt number
    pub ledger_retry_backoff_ms: u64,

    /// Seed demo users and articles when the store is empty
    pub seed_demo_data: bool,

    /// Skip missing migrations during startup
    pub ignore_missing_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or any set variable
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env_required("DATABASE_URL")?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5)?,
            database_acquire_timeout_ms: env_or("DATABASE_ACQUIRE_TIMEOUT_MS", 5000)?,
            ledger_busy_retries: env_or("LEDGER_BUSY_RETRIES", 3)?,
            ledger_retry_backoff_ms: env_or("LEDGER_RETRY_BACKOFF_MS", 25)?,
            seed_demo_data: env_or("SEED_DEMO_DATA", true)?,
            ignore_missing_migrations: env_or("IGNORE_MISSING_MIGRATIONS", true)?,
        })
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.database_acquire_timeout_ms)
    }

    pub fn ledger_settings(&self) -> LedgerSettings {
        LedgerSettings {
            acquire_timeout: self.acquire_timeout(),
            busy_retries: self.ledger_busy_retries,
            retry_backoff: Duration::from_millis(self.ledger_retry_backoff_ms),
        }
    }
}

/// Knobs of the interaction ledger's transaction shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSettings {
    /// Bound on waiting for `BEGIN`; expiry surfaces as storage unavailable.
    pub acquire_timeout: Duration,
    pub busy_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(5),
            busy_retries: 3,
            retry_backoff: Duration::from_millis(25),
        }
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

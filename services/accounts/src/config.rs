use std::str::FromStr;

use tessera_domain::account::ReinstatePolicy;

/// Errors raised while reading [`AccountsConfig`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Accounts service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `ACCOUNTS_PORT`.
    pub accounts_port: u16,
    /// Apply pending migrations before serving (default true). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
    /// Status a suspended account returns to (default pending). Env var: `REINSTATE_STATUS`.
    pub reinstate_policy: ReinstatePolicy,
}

impl AccountsConfig {
    /// Read the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            accounts_port: parse_or(&lookup, "ACCOUNTS_PORT", 8000)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            reinstate_policy: parse_or(&lookup, "REINSTATE_STATUS", ReinstatePolicy::Pending)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

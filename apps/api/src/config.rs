use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a number does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub db_max_connections: u32,
    /// Number of postings fetched from the catalog before ranking.
    pub recommendation_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db_max_connections: parse_positive_env("DB_MAX_CONNECTIONS", 10u32)?,
            recommendation_limit: parse_positive_env("RECOMMENDATION_LIMIT", 5i64)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}

/// Like `parse_env`, but the value must be at least 1. Used for pool sizes and
/// query limits, where zero or a negative number can never work.
fn parse_positive_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + From<u8> + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = parse_env(key, default)?;
    ensure_positive(key, value)
}

fn ensure_positive<T>(key: &str, value: T) -> Result<T>
where
    T: PartialOrd + From<u8> + std::fmt::Display,
{
    if value < T::from(1) {
        bail!("{key} must be at least 1, got {value}");
    }
    Ok(value)
}

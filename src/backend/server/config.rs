/**
 * Server Configuration
 *
 * Settings are read from environment variables (a `.env` file is loaded
 * first by the binary), with defaults suited to local development.
 *
 * # Variables
 *
 * | Variable           | Default                                       |
 * |--------------------|-----------------------------------------------|
 * | `SERVER_HOST`      | `0.0.0.0`                                     |
 * | `SERVER_PORT`      | `8000`                                        |
 * | `DATABASE_URL`     | unset: in-memory store                        |
 * | `JWT_SECRET`       | development secret (logged as a warning)      |
 * | `TOKEN_TTL_DAYS`   | `7`                                           |
 * | `BCRYPT_COST`      | `bcrypt::DEFAULT_COST`                        |
 * | `API_PREFIX`       | `/api`                                        |
 * | `CORS_ORIGINS`     | `http://localhost:3000,http://localhost:5173` |
 * | `SEED_SAMPLE_DATA` | `false`                                       |
 * | `LOG_FORMAT`       | `pretty` (or `json`)                          |
 *
 * # Error Handling
 *
 * A value that is present but unparsable is an error; the server refuses to
 * start rather than silently falling back to the default.
 */

use std::str::FromStr;
use thiserror::Error;

/// Secret used when `JWT_SECRET` is unset
pub const DEV_JWT_SECRET: &str = "snake-arena-dev-secret-change-in-production";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{}'", other)),
        }
    }
}

/// Runtime settings for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory store
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub bcrypt_cost: u32,
    /// Path the API routes are nested under; empty for the root
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub seed_sample_data: bool,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_days: 7,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            api_prefix: "/api".to_string(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
            seed_sample_data: false,
            log_format: LogFormat::Pretty,
        }
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::invalid(key, raw, e.to_string()))
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw, "expected true or false")),
    }
}

/// `/api/` and `api` both become `/api`; `/` becomes empty
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("SERVER_HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("SERVER_PORT") {
            config.port = parse("SERVER_PORT", &port)?;
        }
        config.database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if let Some(secret) = lookup("JWT_SECRET").filter(|secret| !secret.is_empty()) {
            config.jwt_secret = secret;
        }

        if let Some(days) = lookup("TOKEN_TTL_DAYS") {
            config.token_ttl_days = parse("TOKEN_TTL_DAYS", &days)?;
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            config.bcrypt_cost = parse("BCRYPT_COST", &cost)?;
        }
        if let Some(prefix) = lookup("API_PREFIX") {
            config.api_prefix = normalize_prefix(&prefix);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(seed) = lookup("SEED_SAMPLE_DATA") {
            config.seed_sample_data = parse_bool("SEED_SAMPLE_DATA", &seed)?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.log_format = parse("LOG_FORMAT", &format)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Whether tokens are signed with the built-in development secret
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    /// Check ranges that parsing alone does not enforce
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_ttl_days < 1 {
            return Err(ConfigError::invalid(
                "TOKEN_TTL_DAYS",
                self.token_ttl_days.to_string(),
                "must be at least 1",
            ));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
                "must be between 4 and 31",
            ));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::invalid("JWT_SECRET", "", "must not be empty"));
        }
        Ok(())
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.token_ttl_days)
    }
}

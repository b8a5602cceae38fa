//! Application configuration loaded from environment variables.

use std::env;

use bookstore_infra::{DatabaseConfig, JwtConfig};

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 100),
            min_connections: parse_or("DB_MIN_CONNECTIONS", 10),
        });

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080),
            database,
            jwt: jwt_from_env()?,
        })
    }
}

/// The signing key may be given as `JWT_SECURITY_KEY` or in the
/// hierarchical form `JWT__SecurityKey`.
fn jwt_from_env() -> Result<JwtConfig, ConfigError> {
    let secret = env::var("JWT_SECURITY_KEY")
        .or_else(|_| env::var("JWT__SecurityKey"))
        .map_err(|_| ConfigError::Missing("JWT_SECURITY_KEY"))?;

    if secret.trim().is_empty() {
        return Err(ConfigError::Invalid {
            name: "JWT_SECURITY_KEY",
            value: "<empty>".to_string(),
        });
    }

    let expiration_hours = match env::var("JWT_EXPIRATION_HOURS") {
        Ok(raw) => match raw.parse::<i64>() {
            Ok(hours) if hours > 0 => hours,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "JWT_EXPIRATION_HOURS",
                    value: raw,
                });
            }
        },
        Err(_) => 24,
    };

    Ok(JwtConfig {
        secret,
        expiration_hours,
        issuer: env::var("JWT_ISSUER").ok(),
        audience: env::var("JWT_AUDIENCE").ok(),
    })
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

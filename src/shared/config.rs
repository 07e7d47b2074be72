use sea_orm::ConnectOptions;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_connect_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `.env.{RUST_ENV}` wins over `.env`; variables already present in the
    /// process environment are never overwritten.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(rust_env, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup (no env reads).
    pub fn from_lookup<F>(rust_env: String, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 2u32)?;
        let connect_timeout_secs = parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5u64)?;

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
            });
        }

        Ok(Self {
            rust_env,
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            db_connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(self.db_connect_timeout)
            .acquire_timeout(self.db_connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);
        opt
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

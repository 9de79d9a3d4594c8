//! Server configuration, sourced from the environment

use anyhow::{Context, Result};
use ::config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";
pub const DEFAULT_DB_PATH: &str = ":memory:";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Settings recognized by the server
///
/// | Variable       | Default                    |
/// |----------------|----------------------------|
/// | `REDIS_URL`    | `redis://localhost:6379/0` |
/// | `DB_PATH`      | `:memory:`                 |
/// | `BIND_ADDRESS` | `0.0.0.0:8000`             |
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub redis_url: String,
    pub db_path: String,
    pub bind_address: String,
}

impl Settings {
    /// Load settings from the process environment
    pub fn load() -> Result<Self> {
        Self::from_source(Environment::default()).context("Failed to read configuration")
    }

    fn from_source<T>(source: T) -> std::result::Result<Self, ConfigError>
    where
        T: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("redis_url", DEFAULT_REDIS_URL)?
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::Map;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_source(env(&[])).unwrap();
        assert_eq!(settings.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(settings.db_path, DEFAULT_DB_PATH);
        assert_eq!(settings.bind_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::from_source(env(&[
            ("REDIS_URL", "redis://cache:6380/1"),
            ("DB_PATH", "/var/lib/cache-demo/items.db"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(settings.redis_url, "redis://cache:6380/1");
        assert_eq!(settings.db_path, "/var/lib/cache-demo/items.db");
        assert_eq!(
            settings.bind_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_bind_address() {
        let settings = Settings::from_source(env(&[("BIND_ADDRESS", "nowhere")])).unwrap();
        assert!(settings.bind_addr().is_err());
    }
}

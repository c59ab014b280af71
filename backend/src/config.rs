//! Runtime configuration read from `PASSAPORTE_*` environment variables.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATABASE_URL_VAR: &str = "PASSAPORTE_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "PASSAPORTE_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "PASSAPORTE_CORS_ORIGIN";
pub const STATIC_DIR_VAR: &str = "PASSAPORTE_STATIC_DIR";

const APP_DIR_NAME: &str = "Passaporte do Leitor";
const DATABASE_FILE: &str = "passaporte.db";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin the SPA is served from during development
    pub cors_origin: String,
    /// Built SPA to serve for any non-API path
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: "http://localhost:5173".to_string(),
            static_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing or blank values
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = value(DATABASE_URL_VAR) {
            config.database_url = url;
        }
        if let Some(addr) = value(BIND_ADDR_VAR) {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ADDR_VAR, addr))?;
        }
        if let Some(origin) = value(CORS_ORIGIN_VAR) {
            origin
                .parse::<axum::http::HeaderValue>()
                .with_context(|| format!("Invalid {}: {}", CORS_ORIGIN_VAR, origin))?;
            config.cors_origin = origin;
        }
        config.static_dir = value(STATIC_DIR_VAR).map(PathBuf::from);

        Ok(config)
    }

    /// On-disk location of the database, if the URL names a file
    pub fn database_path(&self) -> Option<PathBuf> {
        let path = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

fn default_database_url() -> String {
    let dir = dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."));
    format!("sqlite://{}", dir.join(DATABASE_FILE).display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert!(config.database_url.starts_with("sqlite://"));
        assert!(config.database_url.ends_with("passaporte.db"));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATABASE_URL_VAR, "sqlite://./leitura.db"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (STATIC_DIR_VAR, "web/dist"),
            (CORS_ORIGIN_VAR, "  "),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite://./leitura.db");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("web/dist")));
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.database_path(), Some(PathBuf::from("./leitura.db")));
    }

    #[test]
    fn test_invalid_bind_addr_is_an_error() {
        assert!(AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-addr")])).is_err());
    }

    #[test]
    fn test_memory_database_has_no_path() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            ..AppConfig::default()
        };
        assert!(config.database_path().is_none());
    }
}

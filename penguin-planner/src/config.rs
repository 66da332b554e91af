//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// PLANNER_ADDR is not a socket address
    #[error("invalid PLANNER_ADDR {value:?}: expected host:port")]
    InvalidAddr { value: String },
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`PLANNER_ADDR`)
    pub addr: SocketAddr,

    /// JSON catalog to load instead of the sample data (`PLANNER_CATALOG`)
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup("PLANNER_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                value: addr_value.clone(),
            })?;

        let catalog_path = lookup("PLANNER_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, catalog_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn custom_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PLANNER_ADDR", "0.0.0.0:8080"),
            ("PLANNER_CATALOG", "/etc/planner/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/planner/catalog.json"))
        );
    }

    #[test]
    fn blank_values_use_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("PLANNER_ADDR", " "), ("PLANNER_CATALOG", "")]))
                .unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("PLANNER_ADDR", "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                value: "localhost".into()
            }
        );
    }
}

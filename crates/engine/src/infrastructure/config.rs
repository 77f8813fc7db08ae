//! Application configuration

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server_host,
            server_port,
        })
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid bind address {}:{}",
                    self.server_host, self.server_port
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_bind_all_interfaces_on_5001() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:5001");
    }

    #[test]
    fn server_port_overrides_default() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "8080")]))
                .unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn port_is_fallback_for_server_port() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap();
        assert_eq!(config.server_port, 9000);

        let config =
            AppConfig::from_lookup(lookup_from(&[("PORT", "9000"), ("SERVER_PORT", "9001")]))
                .unwrap();
        assert_eq!(config.server_port, 9001);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn blank_host_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("SERVER_HOST", "  ")])).unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
    }

    #[test]
    fn bad_host_fails_bind_addr() {
        let config = AppConfig {
            server_host: "not a host".to_string(),
            server_port: 5001,
        };
        assert!(config.bind_addr().is_err());
    }
}

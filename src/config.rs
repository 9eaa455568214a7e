use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::api::client::DEFAULT_API_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_STATIC_DIR: &str = "./dist";

/// Central configuration loaded from environment variables.
///
/// Every value has a hardcoded fallback, so the dashboard starts with no
/// configuration at all. The .env file is loaded at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the static server + proxy listens on (PORT)
    pub port: u16,
    /// Interface to bind (BIND_ADDR)
    pub bind_addr: String,
    /// Origin that `/api/*` requests are forwarded to (BACKEND_URL)
    pub backend_url: String,
    /// Base URL the CLI views call, including the `/api` prefix (API_BASE_URL)
    pub api_base_url: String,
    /// Directory holding the prebuilt SPA bundle (STATIC_DIR)
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or empty keys use defaults;
    /// only a malformed PORT is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            backend_url: get("BACKEND_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            api_base_url: get("API_BASE_URL").unwrap_or(defaults.api_base_url),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// `bind_addr:port`, ready for `TcpListener::bind`. IP literals go
    /// through `SocketAddr` so IPv6 addresses come out bracketed.
    pub fn listen_addr(&self) -> String {
        match self.bind_addr.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.bind_addr, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BACKEND_URL", "http://backend:9000/"),
            ("STATIC_DIR", "/srv/www"),
            ("BIND_ADDR", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_url, "http://backend:9000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_ipv6_bind_addr_is_bracketed() {
        let config = Config::from_lookup(lookup(&[("BIND_ADDR", "::")])).unwrap();
        assert_eq!(config.listen_addr(), "[::]:3000");
        assert!(config.listen_addr().parse::<SocketAddr>().is_ok());

        let config = Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap();
        assert_eq!(config.listen_addr(), "localhost:3000");
    }

    #[test]
    fn test_bad_port_is_error() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }
}

//! Service configuration
//!
//! Defaults, optionally overridden by a JSON file named in `PAROLEE_CONFIG`,
//! then by individual `PAROLEE_*` environment variables.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub web_addr: String,

    /// Public base URI used in `Location` and `Link` headers
    /// (defaults to `http://{web_addr}`)
    pub base_uri: Option<String>,

    /// Load the seed parolees at start-up
    pub seed: bool,

    /// Default log directive when `RUST_LOG` is unset
    pub log_level: String,

    /// How long a violation subscription waits before giving up
    pub violation_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            web_addr: "127.0.0.1:10000".to_string(),
            base_uri: None,
            seed: true,
            log_level: "info".to_string(),
            violation_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var("PAROLEE_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Config::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a JSON configuration file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Apply `PAROLEE_*` overrides using the given variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("PAROLEE_WEB_ADDR") {
            self.web_addr = addr;
        }
        if let Some(uri) = lookup("PAROLEE_BASE_URI") {
            self.base_uri = Some(uri);
        }
        if let Some(seed) = lookup("PAROLEE_SEED") {
            self.seed = seed
                .parse()
                .with_context(|| format!("PAROLEE_SEED must be true or false, got '{}'", seed))?;
        }
        if let Some(level) = lookup("PAROLEE_LOG") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Base URI for links handed back to clients, without a trailing slash
    pub fn base_uri(&self) -> String {
        match &self.base_uri {
            Some(uri) => uri.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.web_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.web_addr, "127.0.0.1:10000");
        assert_eq!(config.base_uri(), "http://127.0.0.1:10000");
        assert!(config.seed);
    }

    #[test]
    fn test_partial_json() {
        let config = assert_ok!(Config::from_json(r#"{ "web_addr": "0.0.0.0:8080", "seed": false }"#));
        assert_eq!(config.web_addr, "0.0.0.0:8080");
        assert!(!config.seed);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PAROLEE_BASE_URI", "https://parole.example.org/"),
            ("PAROLEE_SEED", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        assert_ok!(config.apply_overrides(|key| vars.get(key).map(|v| v.to_string())));

        assert_eq!(config.base_uri(), "https://parole.example.org");
        assert!(!config.seed);
    }

    #[test]
    fn test_invalid_seed_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == "PAROLEE_SEED").then(|| "sometimes".to_string())
        });
        assert_err!(result);
    }
}

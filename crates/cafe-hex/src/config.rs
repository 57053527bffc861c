use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: String,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let server_port = lookup("SERVER_PORT").unwrap_or_else(|| "3000".into());
        if server_port.parse::<u16>().is_err() {
            anyhow::bail!("SERVER_PORT must be a port number, got {server_port:?}");
        }
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        Ok(Self {
            server_host,
            server_port,
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(cfg.server_host, "0.0.0.0");
        assert_eq!(cfg.server_port, "3000");
        assert_eq!(cfg.database_url, None);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = Config::from_lookup(lookup_in(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_URL", "sqlite://data/cafe.db"),
        ]))
        .unwrap();
        assert_eq!(cfg.server_host, "127.0.0.1");
        assert_eq!(cfg.server_port, "8080");
        assert_eq!(cfg.database_url.as_deref(), Some("sqlite://data/cafe.db"));
    }

    #[test]
    fn rejects_bad_port_and_ignores_blank_url() {
        assert!(Config::from_lookup(lookup_in(&[("SERVER_PORT", "http")])).is_err());
        let cfg = Config::from_lookup(lookup_in(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(cfg.database_url, None);
    }
}

// src/config.rs
use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use log::{info, warn};
use std::env;

use crate::services::clients::{find_profile, DEFAULT_CLIENT_ID};

pub const DEFAULT_PORT: u16 = 3030;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub seed: Option<u64>,
    pub timezone: Tz,
    pub default_client: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: DEFAULT_PORT,
            seed: None,
            timezone: Tz::UTC,
            default_client: DEFAULT_CLIENT_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv().ok()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        match lookup("PORT") {
            Some(port) => {
                config.port = port
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a number, got {:?}", port))?;
            }
            None => warn!("$PORT not set, defaulting to {}", DEFAULT_PORT),
        }

        if let Some(seed) = lookup("DASHBOARD_SEED") {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("DASHBOARD_SEED must be an unsigned integer, got {:?}", seed))?;
            config.seed = Some(seed);
        }

        if let Some(tz) = lookup("DASHBOARD_TIMEZONE") {
            config.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid DASHBOARD_TIMEZONE {:?}: {}", tz, e))?;
        }

        if let Some(client) = lookup("DASHBOARD_CLIENT") {
            let client = client.trim().to_string();
            if find_profile(&client).is_none() {
                return Err(anyhow!("Unknown DASHBOARD_CLIENT {:?}", client));
            }
            config.default_client = client;
        }

        info!(
            "Config: port={}, seed={:?}, timezone={}, client={}",
            config.port, config.seed, config.timezone, config.default_client
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = load(&[
            ("PORT", "8080"),
            ("DASHBOARD_SEED", "42"),
            ("DASHBOARD_TIMEZONE", "America/Chicago"),
            ("DASHBOARD_CLIENT", "tech-startup"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timezone, chrono_tz::America::Chicago);
        assert_eq!(config.default_client, "tech-startup");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("DASHBOARD_SEED", "-1")]).is_err());
        assert!(load(&[("DASHBOARD_TIMEZONE", "Mars/Olympus")]).is_err());
        assert!(load(&[("DASHBOARD_CLIENT", "nobody")]).is_err());
    }
}

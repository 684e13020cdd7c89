use crate::services::catalog::DEFAULT_CATALOG_URL;
use std::time::Duration;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: String,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let catalog_url =
            lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let timeout_secs = lookup("CATALOG_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            port,
            catalog_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

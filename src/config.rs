use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            user_agent: concat!("safe-api-call/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read settings from the environment. Nothing in the crate calls this
    /// on its own.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(ClientConfig {
            base_url: env::var("API_BASE_URL").context("API_BASE_URL must be set")?,
            user_agent: env::var("API_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_ms: env::var("API_TIMEOUT_MS")
                .unwrap_or_else(|_| defaults.timeout_ms.to_string())
                .parse()
                .context("API_TIMEOUT_MS must be a valid number")?,
            connect_timeout_ms: env::var("API_CONNECT_TIMEOUT_MS")
                .unwrap_or_else(|_| defaults.connect_timeout_ms.to_string())
                .parse()
                .context("API_CONNECT_TIMEOUT_MS must be a valid number")?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Join a request path onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let config = ClientConfig::new("https://api.example.com/v1/");

        assert_eq!(
            config.url_for("/users/me"),
            "https://api.example.com/v1/users/me"
        );
        assert_eq!(
            config.url_for("users/me"),
            "https://api.example.com/v1/users/me"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("safe-api-call/"));
    }
}

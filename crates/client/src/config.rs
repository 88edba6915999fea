//! Client configuration.

use std::time::Duration;

/// Connection settings for [`ApiClient`](crate::ApiClient).
///
/// All fields have defaults suitable for local development; override via
/// environment variables in anything deployed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the platform API, without a trailing slash.
    pub base_url: String,
    /// Total per-request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `GIVEHUB_API_URL`              | `http://localhost:5000` |
    /// | `GIVEHUB_TIMEOUT_SECS`         | `30`                    |
    /// | `GIVEHUB_CONNECT_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Self {
        let base_url = std::env::var("GIVEHUB_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        let timeout_secs: u64 = std::env::var("GIVEHUB_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .expect("GIVEHUB_TIMEOUT_SECS must be a valid u64");

        let connect_timeout_secs: u64 = std::env::var("GIVEHUB_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .expect("GIVEHUB_CONNECT_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url: trim_trailing_slash(base_url),
            timeout_secs,
            connect_timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

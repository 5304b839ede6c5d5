//! Shared configuration structures.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default DNS server queried for email domain checks
pub const DEFAULT_DNS_NAMESERVER: &str = "1.1.1.1:53";

/// Default timeout per DNS query in milliseconds
pub const DEFAULT_DNS_TIMEOUT_MS: u64 = 3000;

/// DNS resolver configuration for the email domain-existence check.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Nameserver address (e.g., "1.1.1.1:53")
    pub nameserver: String,
    /// Timeout per query in milliseconds
    pub timeout_ms: u64,
}

impl ResolverConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            nameserver: env::var("EMAIL_DNS_NAMESERVER")
                .unwrap_or_else(|_| DEFAULT_DNS_NAMESERVER.to_string()),
            timeout_ms: env::var("EMAIL_DNS_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DNS_TIMEOUT_MS),
        }
    }

    /// Get the per-query timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameserver: DEFAULT_DNS_NAMESERVER.to_string(),
            timeout_ms: DEFAULT_DNS_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolver_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.nameserver, DEFAULT_DNS_NAMESERVER);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_resolver_config_deserializes() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"nameserver":"9.9.9.9:53","timeout_ms":500}"#).unwrap();
        assert_eq!(config.nameserver, "9.9.9.9:53");
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }
}

use crate::{env_or_default, ConfigError, FromEnv};
use std::time::Duration;

/// Timeout used for MX lookups when `DNS_TIMEOUT_SECS` is not set.
pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 5;

/// Settings for outbound DNS queries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsConfig {
    /// Upper bound for a single MX query
    pub timeout: Duration,
}

impl DnsConfig {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl FromEnv for DnsConfig {
    /// - DNS_TIMEOUT_SECS: positive integer, defaults to [`DEFAULT_DNS_TIMEOUT_SECS`]
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("DNS_TIMEOUT_SECS", &DEFAULT_DNS_TIMEOUT_SECS.to_string());
        let secs: u64 = raw.parse().map_err(|e| ConfigError::ParseError {
            key: "DNS_TIMEOUT_SECS".to_string(),
            details: format!("{}", e),
        })?;

        if secs == 0 {
            return Err(ConfigError::ParseError {
                key: "DNS_TIMEOUT_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self::new(Duration::from_secs(secs)))
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_DNS_TIMEOUT_SECS))
    }
}

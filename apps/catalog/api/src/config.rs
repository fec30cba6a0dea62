use core_config::{AppInfo, FromEnv, app_info, dns::DnsConfig, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared `core_config` pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub dns: DnsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8000 unless set
        let dns = DnsConfig::from_env()?; // DNS_TIMEOUT_SECS=5 unless set

        Ok(Self {
            app: app_info!(),
            server,
            dns,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(["APP_ENV", "HOST", "PORT", "DNS_TIMEOUT_SECS"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.server.port, 8000);
            assert_eq!(config.dns.timeout, Duration::from_secs(5));
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.app.name, "catalog_api");
        });
    }

    #[test]
    fn test_from_env_rejects_zero_dns_timeout() {
        temp_env::with_var("DNS_TIMEOUT_SECS", Some("0"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_from_env_reads_overrides() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("9100")),
                ("DNS_TIMEOUT_SECS", Some("2")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 9100);
                assert_eq!(config.dns.timeout, Duration::from_secs(2));
            },
        );
    }
}

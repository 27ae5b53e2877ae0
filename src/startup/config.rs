//! Startup configuration.
//!
//! Every setting has a default and can be overridden through an environment
//! variable.

use std::time::Duration;

use crate::adapters::stack_exchange::{DEFAULT_BASE_URL, DEFAULT_SITE};
use crate::adapters::system_network::{DEFAULT_PROBE_ADDRESS, DEFAULT_PROBE_INTERVAL};
use crate::error::ConfigError;

pub const ENV_BASE_URL: &str = "STACKQ_BASE_URL";
pub const ENV_SITE: &str = "STACKQ_SITE";
pub const ENV_TIMEOUT_SECS: &str = "STACKQ_TIMEOUT_SECS";
pub const ENV_PROBE_ADDR: &str = "STACKQ_PROBE_ADDR";
pub const ENV_PROBE_INTERVAL_SECS: &str = "STACKQ_PROBE_INTERVAL_SECS";
pub const ENV_LOG: &str = "STACKQ_LOG";

/// Settings read once at startup.
///
/// # Example
///
/// ```ignore
/// use stackq::startup::StartupConfig;
///
/// let config = StartupConfig::from_env()?.with_site("superuser");
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// API root (default: https://api.stackexchange.com/2.3)
    pub base_url: String,
    /// Stack Exchange community to search
    pub site: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// `host:port` the connectivity probe connects to
    pub probe_address: String,
    /// Time between connectivity probes
    pub probe_interval: Duration,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site: DEFAULT_SITE.to_string(),
            request_timeout: Duration::from_secs(30),
            probe_address: DEFAULT_PROBE_ADDRESS.to_string(),
            probe_interval: DEFAULT_PROBE_INTERVAL,
            log_filter: "info".to_string(),
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_probe_address(mut self, address: impl Into<String>) -> Self {
        self.probe_address = address.into();
        self
    }

    pub fn with_probe_interval(mut self, interval: Duration) -> Self {
        self.probe_interval = interval;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `STACKQ_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(site) = lookup(ENV_SITE) {
            config.site = site;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = parse_secs(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(address) = lookup(ENV_PROBE_ADDR) {
            config.probe_address = address;
        }
        if let Some(secs) = lookup(ENV_PROBE_INTERVAL_SECS) {
            config.probe_interval = parse_secs(ENV_PROBE_INTERVAL_SECS, &secs)?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Reject settings the client cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Empty(ENV_BASE_URL));
        }
        if self.site.trim().is_empty() {
            return Err(ConfigError::Empty(ENV_SITE));
        }
        if self.probe_address.trim().is_empty() {
            return Err(ConfigError::Empty(ENV_PROBE_ADDR));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration(ENV_TIMEOUT_SECS));
        }
        if self.probe_interval.is_zero() {
            return Err(ConfigError::ZeroDuration(ENV_PROBE_INTERVAL_SECS));
        }
        Ok(())
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
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
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.base_url, "https://api.stackexchange.com/2.3");
        assert_eq!(config.site, "stackoverflow");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.probe_address, "api.stackexchange.com:443");
        assert_eq!(config.probe_interval, Duration::from_secs(5));
        assert_eq!(config.log_filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_startup_config_builder() {
        let config = StartupConfig::new()
            .with_base_url("http://localhost:9000")
            .with_site("superuser")
            .with_request_timeout(Duration::from_secs(2))
            .with_probe_address("localhost:9000")
            .with_probe_interval(Duration::from_secs(1))
            .with_log_filter("debug");

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.site, "superuser");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.probe_address, "localhost:9000");
        assert_eq!(config.probe_interval, Duration::from_secs(1));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = StartupConfig::from_lookup(lookup(&[
            (ENV_SITE, "serverfault"),
            (ENV_TIMEOUT_SECS, " 10 "),
            (ENV_LOG, "stackq=trace"),
        ]))
        .unwrap();

        assert_eq!(config.site, "serverfault");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.log_filter, "stackq=trace");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_lookup_invalid_number() {
        let err = StartupConfig::from_lookup(lookup(&[(ENV_PROBE_INTERVAL_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var: ENV_PROBE_INTERVAL_SECS, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_empty_and_zero() {
        assert_eq!(
            StartupConfig::new().with_site(" ").validate(),
            Err(ConfigError::Empty(ENV_SITE))
        );
        assert_eq!(
            StartupConfig::new().with_base_url("").validate(),
            Err(ConfigError::Empty(ENV_BASE_URL))
        );
        assert_eq!(
            StartupConfig::new()
                .with_request_timeout(Duration::ZERO)
                .validate(),
            Err(ConfigError::ZeroDuration(ENV_TIMEOUT_SECS))
        );
        assert_eq!(
            StartupConfig::new()
                .with_probe_interval(Duration::ZERO)
                .validate(),
            Err(ConfigError::ZeroDuration(ENV_PROBE_INTERVAL_SECS))
        );
    }
}

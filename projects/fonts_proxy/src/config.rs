use std::net::SocketAddr;

use interfaces_google_webfonts::index::WEBFONTS_ENDPOINT;
use thiserror::Error;
use utils_trace::{LogFormat, ParseLogFormatError};

pub const ADDR_VAR: &str = "FONTS_PROXY_ADDR";
pub const LOG_LEVEL_VAR: &str = "FONTS_PROXY_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "FONTS_PROXY_LOG_FORMAT";
pub const UPSTREAM_URL_VAR: &str = "GOOGLE_FONTS_API_URL";

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup settings. The API key is not part of it, it is read per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub addr: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
    pub upstream_endpoint: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidAddr: FONTS_PROXY_ADDR={value}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("InvalidLogFormat: {source}")]
    InvalidLogFormat {
        #[from]
        source: ParseLogFormatError,
    },

    #[error("InvalidUpstreamUrl: GOOGLE_FONTS_API_URL must be an http(s) URL, got `{value}`")]
    InvalidUpstreamUrl { value: String },
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unset and blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let addr_value = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(value) => value.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        let upstream_endpoint = get(UPSTREAM_URL_VAR)
            .map(|value| value.trim().to_owned())
            .unwrap_or_else(|| WEBFONTS_ENDPOINT.to_owned());
        if !upstream_endpoint.starts_with("http://") && !upstream_endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidUpstreamUrl {
                value: upstream_endpoint,
            });
        }

        Ok(Self {
            addr,
            log_level: get(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
            log_format,
            upstream_endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ProxyConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.upstream_endpoint, WEBFONTS_ENDPOINT);
    }

    #[test]
    fn reads_overrides() {
        let config = ProxyConfig::from_lookup(lookup(&[
            (ADDR_VAR, "127.0.0.1:9999"),
            (LOG_LEVEL_VAR, "debug"),
            (LOG_FORMAT_VAR, "json"),
            (UPSTREAM_URL_VAR, "http://localhost:3000/webfonts"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:9999".parse().unwrap());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.upstream_endpoint, "http://localhost:3000/webfonts");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ProxyConfig::from_lookup(lookup(&[(ADDR_VAR, "  "), (LOG_LEVEL_VAR, "")])).unwrap();

        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ProxyConfig::from_lookup(lookup(&[(ADDR_VAR, "not-an-addr")])),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            ProxyConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "pretty")])),
            Err(ConfigError::InvalidLogFormat { .. })
        ));
        assert!(matches!(
            ProxyConfig::from_lookup(lookup(&[(UPSTREAM_URL_VAR, "ftp://fonts")])),
            Err(ConfigError::InvalidUpstreamUrl { .. })
        ));
    }
}

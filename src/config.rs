use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "HemaScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CHAT_DELAY_MS: (u64, u64) = (800, 1300);
pub const DEFAULT_VERIFY_DELAY_MS: u64 = 1500;
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 2000;
pub const DEFAULT_VERIFY_SUCCESS_RATE: f64 = 0.9;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "hemascan=info,hemascan_lib=info,tower_http=info"
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Runtime settings for the HTTP server and its simulated delays.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub chat_delay: (Duration, Duration),
    pub verify_delay: Duration,
    pub upload_delay: Duration,
    pub verify_success_rate: f64,
}

impl ServerConfig {
    /// Read `HEMASCAN_*` variables, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("HEMASCAN_ADDR") {
            config.addr = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "HEMASCAN_ADDR",
                value: raw.clone(),
                reason: "expected host:port",
            })?;
        }
        if let Some(raw) = lookup("HEMASCAN_CHAT_DELAY_MS") {
            let (min, max) = parse_delay_range("HEMASCAN_CHAT_DELAY_MS", &raw)?;
            config.chat_delay = (Duration::from_millis(min), Duration::from_millis(max));
        }
        if let Some(raw) = lookup("HEMASCAN_VERIFY_DELAY_MS") {
            config.verify_delay =
                Duration::from_millis(parse_millis("HEMASCAN_VERIFY_DELAY_MS", &raw)?);
        }
        if let Some(raw) = lookup("HEMASCAN_UPLOAD_DELAY_MS") {
            config.upload_delay =
                Duration::from_millis(parse_millis("HEMASCAN_UPLOAD_DELAY_MS", &raw)?);
        }
        if let Some(raw) = lookup("HEMASCAN_VERIFY_SUCCESS_RATE") {
            config.verify_success_rate = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| (0.0..=1.0).contains(r))
                .ok_or(ConfigError::Invalid {
                    var: "HEMASCAN_VERIFY_SUCCESS_RATE",
                    value: raw.clone(),
                    reason: "expected a number between 0 and 1",
                })?;
        }

        Ok(config)
    }

    /// No simulated delays. Used by tests.
    pub fn instant() -> Self {
        Self {
            chat_delay: (Duration::ZERO, Duration::ZERO),
            verify_delay: Duration::ZERO,
            upload_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            chat_delay: (
                Duration::from_millis(DEFAULT_CHAT_DELAY_MS.0),
                Duration::from_millis(DEFAULT_CHAT_DELAY_MS.1),
            ),
            verify_delay: Duration::from_millis(DEFAULT_VERIFY_DELAY_MS),
            upload_delay: Duration::from_millis(DEFAULT_UPLOAD_DELAY_MS),
            verify_success_rate: DEFAULT_VERIFY_SUCCESS_RATE,
        }
    }
}

fn parse_millis(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: "expected milliseconds",
    })
}

/// `"800-1300"` or a single `"500"` (fixed delay).
fn parse_delay_range(var: &'static str, raw: &str) -> Result<(u64, u64), ConfigError> {
    match raw.split_once('-') {
        Some((min, max)) => {
            let min = parse_millis(var, min)?;
            let max = parse_millis(var, max)?;
            if min > max {
                return Err(ConfigError::Invalid {
                    var,
                    value: raw.to_string(),
                    reason: "min exceeds max",
                });
            }
            Ok((min, max))
        }
        None => {
            let fixed = parse_millis(var, raw)?;
            Ok((fixed, fixed))
        }
    }
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
    fn app_name_is_hemascan() {
        assert_eq!(APP_NAME, "HemaScan");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
        assert_eq!(config.chat_delay.0, Duration::from_millis(800));
        assert_eq!(config.verify_delay, Duration::from_millis(1500));
        assert_eq!(config.upload_delay, Duration::from_millis(2000));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HEMASCAN_ADDR", "0.0.0.0:9000"),
            ("HEMASCAN_CHAT_DELAY_MS", "100-200"),
            ("HEMASCAN_VERIFY_DELAY_MS", "0"),
            ("HEMASCAN_VERIFY_SUCCESS_RATE", "1"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(
            config.chat_delay,
            (Duration::from_millis(100), Duration::from_millis(200))
        );
        assert_eq!(config.verify_delay, Duration::ZERO);
        assert_eq!(config.verify_success_rate, 1.0);
    }

    #[test]
    fn single_value_delay_is_fixed() {
        assert_eq!(parse_delay_range("X", "250").unwrap(), (250, 250));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("HEMASCAN_ADDR", "nowhere")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup(&[("HEMASCAN_CHAT_DELAY_MS", "900-100")])).is_err()
        );
        assert!(
            ServerConfig::from_lookup(lookup(&[("HEMASCAN_VERIFY_SUCCESS_RATE", "1.5")])).is_err()
        );
        let err = ServerConfig::from_lookup(lookup(&[("HEMASCAN_UPLOAD_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("HEMASCAN_UPLOAD_DELAY_MS"));
    }

    #[test]
    fn instant_has_no_delays() {
        let config = ServerConfig::instant();
        assert_eq!(config.chat_delay, (Duration::ZERO, Duration::ZERO));
        assert_eq!(config.verify_delay, Duration::ZERO);
        assert_eq!(config.upload_delay, Duration::ZERO);
    }
}

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use mfdash_core::constants::{DEFAULT_AMC, DEFAULT_AUM_PERIOD, DEFAULT_RISK_FREE_RATE};
use mfdash_market_data::AmfiEndpoints;

/// Log output format for the tracing subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub default_amc: String,
    pub default_aum_period: String,
    pub risk_free_rate: f64,
    pub endpoints: AmfiEndpoints,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            static_dir: "static".to_string(),
            default_amc: DEFAULT_AMC.to_string(),
            default_aum_period: DEFAULT_AUM_PERIOD.to_string(),
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            endpoints: AmfiEndpoints::default(),
            log_format: LogFormat::Text,
        }
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Read `MFD_*` variables (after loading `.env`), falling back to
    /// defaults. Unparseable numbers fall back too; an unparseable listen
    /// address is an error.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("MFD_LISTEN_ADDR") {
            Ok(addr) => addr.parse().context("Invalid MFD_LISTEN_ADDR")?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("MFD_CORS_ALLOW_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or(defaults.cors_allow);
        let request_timeout = std::env::var("MFD_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);
        let risk_free_rate = std::env::var("MFD_RISK_FREE_RATE")
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(defaults.risk_free_rate);
        let log_format = match std::env::var("MFD_LOG_FORMAT") {
            Ok(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            Ok(_) => LogFormat::Text,
            Err(_) => defaults.log_format,
        };

        let endpoints = AmfiEndpoints {
            nav_all_url: env_or("MFD_AMFI_NAV_URL", &defaults.endpoints.nav_all_url),
            mfapi_base_url: env_or("MFD_MFAPI_BASE_URL", &defaults.endpoints.mfapi_base_url),
            aaum_url: env_or("MFD_AMFI_AAUM_URL", &defaults.endpoints.aaum_url),
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            static_dir: env_or("MFD_STATIC_DIR", &defaults.static_dir),
            default_amc: env_or("MFD_DEFAULT_AMC", &defaults.default_amc),
            default_aum_period: env_or("MFD_AUM_PERIOD", &defaults.default_aum_period),
            risk_free_rate,
            endpoints,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_millis(30000));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_unset_variables_fall_back_to_defaults() {
        for key in [
            "MFD_LISTEN_ADDR",
            "MFD_CORS_ALLOW_ORIGINS",
            "MFD_REQUEST_TIMEOUT_MS",
            "MFD_LOG_FORMAT",
        ] {
            if std::env::var_os(key).is_some() {
                return;
            }
        }

        let config = Config::from_env().unwrap();
        let defaults = Config::default();
        assert_eq!(config.listen_addr, defaults.listen_addr);
        assert_eq!(config.cors_allow, defaults.cors_allow);
        assert_eq!(config.request_timeout, defaults.request_timeout);
        assert_eq!(config.log_format, defaults.log_format);
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}

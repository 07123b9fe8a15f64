//! Server configuration read from the environment at start-up.
//!
//! | variable                      | default                                   |
//! |-------------------------------|-------------------------------------------|
//! | `WALKTHROUGH_ADDR`            | `127.0.0.1:8080`                          |
//! | `WALKTHROUGH_DATABASE`        | `walkthrough.sqlite` (`:memory:` allowed) |
//! | `WALKTHROUGH_STATIC_DIR`      | `static/dist`                             |
//! | `WALKTHROUGH_REPORT_BASE_URL` | `https://example.sharepoint.com/reports`  |

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATABASE: &str = "walkthrough.sqlite";
const DEFAULT_STATIC_DIR: &str = "static/dist";
const DEFAULT_REPORT_BASE_URL: &str = "https://example.sharepoint.com/reports";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub database: String,
    pub static_dir: PathBuf,
    /// Base of the mock spreadsheet URL returned by `GenerateReport`.
    pub report_base_url: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("WALKTHROUGH_ADDR {value:?} is not a socket address: {source}")]
    Addr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("validation error: {0}")]
    Validation(String),
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_addr = var("WALKTHROUGH_ADDR", DEFAULT_ADDR);
        let addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::Addr {
                value: raw_addr.clone(),
                source,
            })?;

        let report_base_url = var("WALKTHROUGH_REPORT_BASE_URL", DEFAULT_REPORT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        if report_base_url.is_empty() {
            return Err(ConfigError::Validation(
                "WALKTHROUGH_REPORT_BASE_URL must not be empty".into(),
            ));
        }

        Ok(Self {
            addr,
            database: var("WALKTHROUGH_DATABASE", DEFAULT_DATABASE),
            static_dir: PathBuf::from(var("WALKTHROUGH_STATIC_DIR", DEFAULT_STATIC_DIR)),
            report_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let cfg = config(&[("WALKTHROUGH_DATABASE", "  ")]).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(cfg.database, "walkthrough.sqlite");
        assert_eq!(cfg.static_dir, PathBuf::from("static/dist"));
        assert_eq!(cfg.report_base_url, "https://example.sharepoint.com/reports");
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config(&[
            ("WALKTHROUGH_ADDR", "0.0.0.0:3000"),
            ("WALKTHROUGH_DATABASE", ":memory:"),
            ("WALKTHROUGH_REPORT_BASE_URL", "https://reports.example.test/"),
        ])
        .unwrap();
        assert_eq!(cfg.addr.port(), 3000);
        assert_eq!(cfg.database, ":memory:");
        assert_eq!(cfg.report_base_url, "https://reports.example.test");
    }

    #[test]
    fn bad_address_is_rejected() {
        let err = config(&[("WALKTHROUGH_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Addr { .. }));
    }

    #[test]
    fn slash_only_report_url_is_rejected() {
        let err = config(&[("WALKTHROUGH_REPORT_BASE_URL", "/")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}

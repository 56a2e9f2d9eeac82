//! Environment-driven configuration for the proxy service.

use std::env;

use tracing::{info, warn};

use crate::{BACKEND_URL_ENV_VAR, PORT_ENV_VAR, USE_MOCK_DATA_ENV_VAR};

/// Default port the proxy binds to.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Origin of the real backend. When unset every proxied request is
    /// answered with a hard 500 and no fallback.
    pub backend_url: Option<String>,
    /// Serve fixture data when the backend fails. Defaults to true, which
    /// also means a dead backend looks healthy to callers; the
    /// connection-status endpoint reports the truth.
    pub use_mock_data: bool,
    pub port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            use_mock_data: true,
            port: DEFAULT_PORT,
        }
    }
}

impl ProxyConfig {
    /// Load from `BACKEND_URL`, `USE_MOCK_DATA`, and `PROCOMPARE_PORT`.
    pub fn from_env() -> Self {
        let backend_url = match env::var(BACKEND_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                let mut url = url.trim().to_string();
                while url.ends_with('/') {
                    url.pop();
                }
                Some(url)
            }
            _ => {
                warn!("{BACKEND_URL_ENV_VAR} not set, proxied requests will fail");
                None
            }
        };

        let use_mock_data = match env::var(USE_MOCK_DATA_ENV_VAR) {
            Ok(raw) => match parse_bool(&raw) {
                Some(flag) => flag,
                None => {
                    warn!("Invalid {USE_MOCK_DATA_ENV_VAR} value {raw:?}, defaulting to true");
                    true
                }
            },
            Err(_) => true,
        };

        let port = match env::var(PORT_ENV_VAR) {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    warn!("Invalid {PORT_ENV_VAR} value {raw:?}, using {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
            },
            Err(_) => {
                info!("{PORT_ENV_VAR} not set, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Self {
            backend_url,
            use_mock_data,
            port,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert!(config.backend_url.is_none());
        assert!(config.use_mock_data);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_parse_bool_forms() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_from_env_reads_and_trims() {
        env::set_var(BACKEND_URL_ENV_VAR, "http://localhost:8080/");
        env::set_var(USE_MOCK_DATA_ENV_VAR, "false");
        env::set_var(PORT_ENV_VAR, "4100");

        let config = ProxyConfig::from_env();
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:8080"));
        assert!(!config.use_mock_data);
        assert_eq!(config.port, 4100);

        env::remove_var(BACKEND_URL_ENV_VAR);
        env::remove_var(USE_MOCK_DATA_ENV_VAR);
        env::remove_var(PORT_ENV_VAR);
    }
}

//! Server settings, read from the environment.
//!
//! `main.rs` loads an optional `.env` file first, so every variable below can
//! live there instead of the shell.
//!
//! | variable               | default                            |
//! |------------------------|------------------------------------|
//! | `SYNTH_HOST`           | `localhost`                        |
//! | `SYNTH_PORT`           | `8000`                             |
//! | `SYNTH_GENERATOR_URL`  | `http://127.0.0.1:8001/generate`   |
//! | `SYNTH_ALLOWED_ORIGIN` | `http://localhost:8080`            |
//! | `SYNTH_OPEN_BROWSER`   | `true`                             |

use std::env;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_GENERATOR_URL: &str = "http://127.0.0.1:8001/generate";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SYNTH_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("SYNTH_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upstream service that synthesizes the records.
    pub generator_url: String,
    /// Origin of the frontend dev server, allowed through CORS.
    pub allowed_origin: String,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("SYNTH_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let open_browser = match get("SYNTH_OPEN_BROWSER") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(raw)),
            },
            None => true,
        };

        Ok(Self {
            host: get("SYNTH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            generator_url: get("SYNTH_GENERATOR_URL")
                .unwrap_or_else(|| DEFAULT_GENERATOR_URL.to_string()),
            allowed_origin: get("SYNTH_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            open_browser,
        })
    }

    /// Address the page is served from.
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_page_endpoint() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.public_url(), "http://localhost:8000");
        assert_eq!(config.generator_url, DEFAULT_GENERATOR_URL);
        assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert!(config.open_browser);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SYNTH_HOST", "0.0.0.0"),
            ("SYNTH_PORT", "9000"),
            ("SYNTH_GENERATOR_URL", "http://gen.internal/v1"),
            ("SYNTH_ALLOWED_ORIGIN", "http://localhost:5173"),
            ("SYNTH_OPEN_BROWSER", "false"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.generator_url, "http://gen.internal/v1");
        assert_eq!(config.allowed_origin, "http://localhost:5173");
        assert!(!config.open_browser);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("SYNTH_PORT", "  "), ("SYNTH_HOST", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn rejects_bad_port_and_flag() {
        assert_eq!(
            config_from(&[("SYNTH_PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(
            config_from(&[("SYNTH_OPEN_BROWSER", "maybe")]),
            Err(ConfigError::InvalidFlag("maybe".to_string()))
        );
    }
}

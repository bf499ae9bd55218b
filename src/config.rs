use reqwest::Url;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub agent: AgentConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub base_url: String,
    pub path: String,
    pub timeout_secs: Option<u64>,
    pub trim_query: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub const DEFAULT_AGENT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_AGENT_PATH: &str = "/api/agent";

impl AgentConfig {
    /// Full URL of the agent endpoint, `{base_url}{path}`.
    ///
    /// Any path already on the base URL is kept.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid("AGENT_BASE_URL", &self.base_url, e))?;

        let full = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        Url::parse(&full).map_err(|e| ConfigError::invalid("AGENT_PATH", &self.path, e))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AGENT_BASE_URL.to_string(),
            path: DEFAULT_AGENT_PATH.to_string(),
            timeout_secs: None,
            trim_query: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let agent = AgentConfig {
            base_url: var("AGENT_BASE_URL").unwrap_or_else(|| DEFAULT_AGENT_BASE_URL.to_string()),
            path: var("AGENT_PATH").unwrap_or_else(|| DEFAULT_AGENT_PATH.to_string()),
            timeout_secs: match var("AGENT_TIMEOUT_SECS") {
                Some(raw) if !raw.trim().is_empty() => Some(
                    raw.trim()
                        .parse()
                        .map_err(|e| ConfigError::invalid("AGENT_TIMEOUT_SECS", &raw, e))?,
                ),
                _ => None,
            },
            trim_query: match var("AGENT_TRIM_QUERY") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::invalid("AGENT_TRIM_QUERY", &raw, e))?,
                None => false,
            },
        };

        let port = var("PORT").unwrap_or_else(|| "3000".to_string());

        Ok(Self {
            agent,
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: port
                    .parse()
                    .map_err(|e| ConfigError::invalid("PORT", &port, e))?,
            },
            logging: LoggingConfig {
                log_dir: var("DEVSCOUT_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_log_dir),
            },
        })
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devscout")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.agent.endpoint().unwrap().as_str(),
            "http://localhost:8000/api/agent"
        );
        assert_eq!(config.agent.timeout(), None);
        assert!(!config.agent.trim_query);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AGENT_BASE_URL", "https://agent.internal:9443"),
            ("AGENT_PATH", "/v2/agent"),
            ("AGENT_TIMEOUT_SECS", "30"),
            ("AGENT_TRIM_QUERY", "true"),
            ("PORT", "8080"),
            ("DEVSCOUT_LOG_DIR", "/tmp/devscout-logs"),
        ])
        .unwrap();

        assert_eq!(
            config.agent.endpoint().unwrap().as_str(),
            "https://agent.internal:9443/v2/agent"
        );
        assert_eq!(config.agent.timeout(), Some(Duration::from_secs(30)));
        assert!(config.agent.trim_query);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.log_dir, PathBuf::from("/tmp/devscout-logs"));
    }

    #[test]
    fn test_base_url_prefix_is_kept() {
        let config = config_from(&[("AGENT_BASE_URL", "http://gw.local/research")]).unwrap();
        assert_eq!(
            config.agent.endpoint().unwrap().as_str(),
            "http://gw.local/research/api/agent"
        );

        let config = config_from(&[
            ("AGENT_BASE_URL", "http://gw.local/research/"),
            ("AGENT_PATH", "agent"),
        ])
        .unwrap();
        assert_eq!(
            config.agent.endpoint().unwrap().as_str(),
            "http://gw.local/research/agent"
        );
    }

    #[test]
    fn test_blank_timeout_means_none() {
        let config = config_from(&[("AGENT_TIMEOUT_SECS", "  ")]).unwrap();
        assert_eq!(config.agent.timeout_secs, None);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = config_from(&[("AGENT_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("AGENT_TIMEOUT_SECS"));

        // A bad URL loads, and only fails once the endpoint is built
        let config = config_from(&[("AGENT_BASE_URL", "not a url")]).unwrap();
        let err = config.agent.endpoint().unwrap_err();
        assert!(err.to_string().contains("AGENT_BASE_URL"));

        let err = config_from(&[("PORT", "99999")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

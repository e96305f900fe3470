use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const LISTEN_DEFAULT: &str = "0.0.0.0:8080";

const USER_AGENT_DEFAULT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";
const ACCEPT_DEFAULT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Applies to both the probe and the document fetch.
const TIMEOUT_SECS_DEFAULT: u64 = 100;

const YOUTUBE_EMBED_DEFAULT: &str = "https://www.youtube.com/embed/";

/// `{url}` is replaced with the url-encoded target.
const SHARE_COUNT_ENDPOINT_DEFAULT: &str = "https://api.facebook.com/method/fql.query?format=json&query=select%20%20like_count%20from%20link_stat%20where%20url=%22{url}%22";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("config is malformed: {0:?}")]
    Malformed(#[from] serde_yml::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Settings for the outbound HTTP client used by both the probe and the
/// document fetch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            connect_timeout_secs: default_timeout_secs(),
            read_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ScrapeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub scrape: ScrapeConfig,

    #[serde(default = "default_youtube_embed_prefix")]
    pub youtube_embed_prefix: String,

    #[serde(default = "default_share_count_endpoint")]
    pub share_count_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            scrape: ScrapeConfig::default(),
            youtube_embed_prefix: default_youtube_embed_prefix(),
            share_count_endpoint: default_share_count_endpoint(),
        }
    }
}

fn default_listen() -> String {
    LISTEN_DEFAULT.to_string()
}

fn default_user_agent() -> String {
    USER_AGENT_DEFAULT.to_string()
}

fn default_accept() -> String {
    ACCEPT_DEFAULT.to_string()
}

fn default_timeout_secs() -> u64 {
    TIMEOUT_SECS_DEFAULT
}

fn default_youtube_embed_prefix() -> String {
    YOUTUBE_EMBED_DEFAULT.to_string()
}

fn default_share_count_endpoint() -> String {
    SHARE_COUNT_ENDPOINT_DEFAULT.to_string()
}

impl Config {
    /// Loads configuration from the given file, falling back to defaults
    /// when no path is given or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) if path.exists() => {
                let config_str = std::fs::read_to_string(path)?;
                serde_yml::from_str(&config_str)?
            }
            _ => Self::default(),
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scrape.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "scrape.connect_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.scrape.read_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "scrape.read_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.share_count_endpoint.contains("{url}") {
            return Err(ConfigError::Invalid(
                "share_count_endpoint must contain a {url} placeholder".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_file() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");
        assert_eq!(config.scrape.connect_timeout_secs, 100);
        assert_eq!(config.scrape.read_timeout_secs, 100);
        assert_eq!(config.youtube_embed_prefix, "https://www.youtube.com/embed/");
    }

    #[test]
    fn defaults_when_file_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.yaml");
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "listen: \"127.0.0.1:9000\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert_eq!(config.scrape.read_timeout_secs, 100);
    }

    #[test]
    fn round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yml::to_string(&config).unwrap();
        let back: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(back.listen, config.listen);
        assert_eq!(back.share_count_endpoint, config.share_count_endpoint);
    }

    #[test]
    fn rejects_zero_timeout() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "scrape:\n  read_timeout_secs: 0\n").unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_endpoint_without_placeholder() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "share_count_endpoint: \"https://example.com/count\"\n").unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::Invalid(_))
        ));
    }
}

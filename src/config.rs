use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tmdb_base_url(),
        }
    }
}

/// Truncation limits and the homepage skip-empty policy. The full-page
/// limits are configurable per domain; previews are always capped low so
/// homepage rows stay short.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowseConfig {
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    #[serde(default = "default_page_limit")]
    pub movie_page_limit: usize,
    #[serde(default = "default_page_limit")]
    pub series_page_limit: usize,
    #[serde(default = "default_true")]
    pub skip_empty_on_home: bool,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
            movie_page_limit: default_page_limit(),
            series_page_limit: default_page_limit(),
            skip_empty_on_home: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie: String,
    /// Sessions idle longer than this are dropped by the sweep task.
    #[serde(default = "default_idle_minutes")]
    pub idle_minutes: i64,
    #[serde(default = "default_sweep_secs")]
    pub sweep_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie: default_cookie_name(),
            idle_minutes: default_idle_minutes(),
            sweep_secs: default_sweep_secs(),
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_preview_limit() -> usize {
    6
}

fn default_page_limit() -> usize {
    20
}

fn default_true() -> bool {
    true
}

fn default_cookie_name() -> String {
    "reelhouse_session".to_string()
}

fn default_idle_minutes() -> i64 {
    120
}

fn default_sweep_secs() -> u64 {
    300
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

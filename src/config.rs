//! Configuration loaded from `<config dir>/oeis-view/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://oeis.org";
pub const DEFAULT_WIKI_URL: &str = "https://oeis.org/wiki";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid {field}: {value:?} must start with http:// or https://")]
    InvalidUrl { field: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OeisConfig {
    /// OEIS site root; entry pages live at `{base_url}/A######`
    pub base_url: String,
    /// Wiki root; author links point at `{wiki_url}/User:Name`
    pub wiki_url: String,
    /// Request timeout for the search endpoint, in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Annotate sequence IDs found by `scan`
    pub enable_code_lens: bool,
}

impl Default for OeisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("oeis-view/{}", env!("CARGO_PKG_VERSION")),
            enable_code_lens: true,
        }
    }
}

impl OeisConfig {
    /// Default location (`~/.config/oeis-view/config.yaml` on Linux)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oeis-view").join("config.yaml"))
    }

    /// Load from an explicit path, or from the default path when it exists
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.normalized()
    }

    /// Validate URLs and strip trailing slashes
    pub fn normalized(mut self) -> ConfigResult<Self> {
        self.base_url = normalize_url("base_url", &self.base_url)?;
        self.wiki_url = normalize_url("wiki_url", &self.wiki_url)?;
        Ok(self)
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn normalize_url(field: &'static str, value: &str) -> ConfigResult<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}

//! Client configuration.
//!
//! Layered, lowest to highest precedence:
//!
//! - built-in defaults
//! - optional TOML file (`--config`)
//! - environment: `APT_TRADE_API_URL`, `APT_TRADE_PAGE_SIZE`
//! - command-line flags

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trade_api::DEFAULT_BASE_URL;
use trade_core::DEFAULT_PAGE_SIZE;

pub const ENV_API_URL: &str = "APT_TRADE_API_URL";
pub const ENV_PAGE_SIZE: &str = "APT_TRADE_PAGE_SIZE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Configuration for the trade client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing path.
    pub api_url: String,
    /// Rows per page for new sessions.
    pub page_size: u32,
    /// Look-back window for the frequently-traded view.
    pub frequent_months: u32,
    /// Minimum trades within the window to count as frequent.
    pub frequent_min_count: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            frequent_months: 6,
            frequent_min_count: 3,
        }
    }
}

impl ClientConfig {
    /// Defaults, then the TOML file if one is given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };
        config.apply_vars(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment
    /// in production).
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(size) = parse_var::<u32, _>(&lookup, ENV_PAGE_SIZE)? {
            self.page_size = size;
        }
        self.validate()
    }

    /// Command-line flags win over everything else.
    pub fn apply_cli(&mut self, api_url: Option<String>, page_size: Option<u32>) -> Result<(), ConfigError> {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(size) = page_size {
            self.page_size = size;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size".to_string(),
                value: self.page_size.to_string(),
            });
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api_url".to_string(),
                value: self.api_url.clone(),
            });
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: val,
            }),
        None => Ok(None),
    }
}

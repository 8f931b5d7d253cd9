//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VEHICLE_SELECTOR_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CATALOG_PATH, DEFAULT_MAKE_SUGGESTION_LIMIT, DEFAULT_MODEL_SUGGESTION_LIMIT,
    SuggestionLimits,
};

/// Selector configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VEHICLE_SELECTOR_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON file. Default: `data/models.json`.
    pub catalog_path: PathBuf,

    /// Max make suggestions per keystroke. Default: `12`.
    pub make_limit: usize,

    /// Max model suggestions per keystroke. Default: `20`.
    pub model_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            make_limit: DEFAULT_MAKE_SUGGESTION_LIMIT,
            model_limit: DEFAULT_MODEL_SUGGESTION_LIMIT,
        }
    }
}

impl Config {
    const ENV_CATALOG_PATH: &'static str = "VEHICLE_SELECTOR_CATALOG_PATH";
    const ENV_MAKE_LIMIT: &'static str = "VEHICLE_SELECTOR_MAKE_LIMIT";
    const ENV_MODEL_LIMIT: &'static str = "VEHICLE_SELECTOR_MODEL_LIMIT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path = Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let make_limit = Self::parse_limit_from_env(Self::ENV_MAKE_LIMIT, defaults.make_limit)?;
        let model_limit = Self::parse_limit_from_env(Self::ENV_MODEL_LIMIT, defaults.model_limit)?;

        Ok(Self {
            catalog_path,
            make_limit,
            model_limit,
        })
    }

    /// Checks limits and the catalog path.
    ///
    /// A missing catalog file is not an error here; the loader reports it
    /// and the session starts empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.make_limit == 0 {
            return Err(ConfigError::InvalidLimit {
                name: Self::ENV_MAKE_LIMIT,
                value: self.make_limit.to_string(),
            });
        }
        if self.model_limit == 0 {
            return Err(ConfigError::InvalidLimit {
                name: Self::ENV_MODEL_LIMIT,
                value: self.model_limit.to_string(),
            });
        }

        if self.catalog_path.exists() && !self.catalog_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.catalog_path.clone(),
            });
        }

        Ok(())
    }

    /// Suggestion caps for the session.
    pub fn limits(&self) -> SuggestionLimits {
        SuggestionLimits::new(self.make_limit, self.model_limit)
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_limit_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let limit: usize = value.trim().parse().map_err(|e| ConfigError::LimitParseError {
                    name: var_name,
                    value: value.clone(),
                    source: e,
                })?;

                if limit == 0 {
                    return Err(ConfigError::InvalidLimit {
                        name: var_name,
                        value,
                    });
                }

                Ok(limit)
            }
            Err(_) => Ok(default),
        }
    }
}

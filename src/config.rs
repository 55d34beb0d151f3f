use crate::error::HumanizeError;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config files probed by [`HumanizeOptions::discover`], in order.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] =
    ["humanize.config.json", "config/humanize.config.json"];

/// Switches for each transformation category. Every switch is independent.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct HumanizeOptions {
    #[serde(default = "default_enabled")]
    pub transform_hidden: bool,

    #[serde(default = "default_enabled")]
    pub transform_trailing_whitespace: bool,

    #[serde(default = "default_enabled")]
    pub transform_nbs: bool,

    #[serde(default = "default_enabled")]
    pub transform_dashes: bool,

    #[serde(default = "default_enabled")]
    pub transform_quotes: bool,

    #[serde(default = "default_enabled")]
    pub transform_other: bool,

    #[serde(default)]
    pub keyboard_only: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        HumanizeOptions {
            transform_hidden: true,
            transform_trailing_whitespace: true,
            transform_nbs: true,
            transform_dashes: true,
            transform_quotes: true,
            transform_other: true,
            keyboard_only: false,
        }
    }
}

impl HumanizeOptions {
    pub fn from_json_str(text: &str) -> Result<Self, HumanizeError> {
        serde_json::from_str(text).map_err(HumanizeError::InvalidConfig)
    }

    /// Reads options from a JSON file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HumanizeError> {
        let path = path.as_ref();
        info!("Loading options from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| HumanizeError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| HumanizeError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the first of [`DEFAULT_CONFIG_PATHS`] that exists, relative to the working directory.
    pub fn discover() -> Result<Option<Self>, HumanizeError> {
        for p in &DEFAULT_CONFIG_PATHS {
            let path = PathBuf::from(p);
            if path.is_file() {
                return Self::load(&path).map(Some);
            }
        }
        debug!("No options file found, using defaults");
        Ok(None)
    }
}

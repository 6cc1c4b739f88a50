use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::data::MADISON_LOCATION;
use crate::export::{DEFAULT_JS_FILE, DEFAULT_JSON_FILE};

fn default_location() -> String {
    MADISON_LOCATION.to_string()
}
fn default_output_json() -> PathBuf {
    PathBuf::from(DEFAULT_JSON_FILE)
}
fn default_output_js() -> PathBuf {
    PathBuf::from(DEFAULT_JS_FILE)
}
fn default_true() -> bool {
    true
}
fn default_sample_size() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_output_json")]
    pub output_json: PathBuf,
    #[serde(default = "default_output_js")]
    pub output_js: PathBuf,
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(default = "default_true")]
    pub js: bool,
    #[serde(default = "default_true")]
    pub dedup: bool,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            output_json: default_output_json(),
            output_js: default_output_js(),
            json: true,
            js: true,
            dedup: true,
            sample_size: default_sample_size(),
            verbose: false,
        }
    }
}

impl FileConfig {
    /// Load an explicitly requested config file. Missing or malformed files are errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// First parseable config from the standard search paths.
    ///
    /// Nothing is logged here; callers report [`ConfigSearch::skipped`] once
    /// logging is up.
    pub fn load() -> ConfigSearch {
        load_from(&get_config_paths())
    }
}

/// A config file that exists but could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedConfig {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of walking the config search paths.
#[derive(Debug, Default)]
pub struct ConfigSearch {
    pub config: Option<FileConfig>,
    pub skipped: Vec<SkippedConfig>,
}

fn load_from(paths: &[PathBuf]) -> ConfigSearch {
    let mut search = ConfigSearch::default();

    for path in paths {
        if !path.exists() {
            continue;
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| toml::from_str::<FileConfig>(&contents).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => {
                search.config = Some(config);
                return search;
            }
            Err(reason) => search.skipped.push(SkippedConfig {
                path: path.clone(),
                reason,
            }),
        }
    }

    search
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("dogparks.toml"));
    paths.push(PathBuf::from(".dogparks.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("dogparks").join("config.toml"));
        paths.push(config_dir.join("dogparks.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".dogparks.toml"));
    }

    paths
}

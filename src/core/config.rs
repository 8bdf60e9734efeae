//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - Trip Mate endpoint URL

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TripMateError};

/// Where the Trip Mate server listens when run locally
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8001/";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Trip Mate server
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "configuration saved");

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "trip-mate", "trip-mate")
            .ok_or_else(|| TripMateError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Set the endpoint after validating it
    pub fn set_endpoint(&mut self, value: &str) -> Result<()> {
        let url = parse_endpoint(value)?;
        self.endpoint = url.to_string();
        Ok(())
    }

    /// Parsed, normalised endpoint URL
    pub fn endpoint_url(&self) -> Result<Url> {
        parse_endpoint(&self.endpoint)
    }
}

/// Parse an endpoint URL and normalise it for relative joins.
///
/// Only http(s) is accepted. The path always ends in `/` so that joining
/// `query` onto `http://host/api` yields `http://host/api/query`.
pub fn parse_endpoint(value: &str) -> Result<Url> {
    let mut url = Url::parse(value.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TripMateError::InvalidEndpoint(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Resolve the endpoint: explicit override first, then the config file
pub fn resolve_endpoint(override_url: Option<&str>) -> Result<Url> {
    match override_url {
        Some(value) => parse_endpoint(value),
        None => Config::load()?.endpoint_url(),
    }
}

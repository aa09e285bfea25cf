//! Configuration file reader
//!
//! Reads settings from (in priority order):
//! - An explicit `--config` path
//! - `relinfo.toml` in the working directory
//! - Built-in defaults (github.com, Maven Central)
//!
//! Command-line flags are applied on top by the caller.

use crate::domain::VcsType;
use crate::error::ConfigError;
use crate::registry::MAVEN_CENTRAL_URL;
use crate::resolver::DEFAULT_CONCURRENCY;
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = "relinfo.toml";

/// Default VCS web host
const DEFAULT_VCS_URI: &str = "https://github.com";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vcs: VcsSettings,
    pub resolver: ResolverSettings,
}

/// VCS provider settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VcsSettings {
    /// Provider type
    #[serde(rename = "type")]
    pub vcs_type: VcsType,
    /// Provider host, used to recognise repositories on self-hosted instances
    pub api_host: Url,
}

/// Artifact resolver settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Maven repositories, tried in order
    pub repositories: Vec<Url>,
    /// Maximum concurrent descriptor lookups
    pub concurrency: usize,
    /// Fall back to parent POMs that declare a URL
    pub follow_parent: bool,
}

impl Default for VcsSettings {
    fn default() -> Self {
        Self {
            vcs_type: VcsType::GitHub,
            api_host: parse_url(DEFAULT_VCS_URI).expect("valid default VCS URI"),
        }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            repositories: vec![parse_url(MAVEN_CENTRAL_URL).expect("valid Maven Central URL")],
            concurrency: DEFAULT_CONCURRENCY,
            follow_parent: false,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path or from `dir`
    ///
    /// An explicit path must exist. Without one, a missing `relinfo.toml`
    /// in `dir` falls back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = dir.join(CONFIG_FILENAME);
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate a settings file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        Self::from_toml_str(&content, path)
    }

    /// Parse and validate settings from TOML content
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }
        Ok(())
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, vcs_type: Option<VcsType>, vcs_uri: Option<Url>) -> Self {
        if let Some(vcs_type) = vcs_type {
            self.vcs.vcs_type = vcs_type;
        }
        if let Some(vcs_uri) = vcs_uri {
            self.vcs.api_host = vcs_uri;
        }
        self
    }
}

/// Parse an absolute URL
pub fn parse_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|e| ConfigError::invalid_url(value, e.to_string()))
}

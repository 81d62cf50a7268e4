//! Configuration file support for install planning.
//!
//! Two configuration file locations are read:
//! - Global: `~/.harbour/install.toml` - User-wide defaults
//! - Project: `.harbour/install.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::PlatformFamily;

/// Install configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Install settings
    pub install: InstallConfig,
}

/// Install-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Platform family to plan for (None = host)
    pub platform: Option<PlatformFamily>,

    /// Warn when TARGETS supplies a destination no listed target uses (None = true)
    pub warn_unused_destinations: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.install.platform.is_some() {
            self.install.platform = other.install.platform;
        }
        if other.install.warn_unused_destinations.is_some() {
            self.install.warn_unused_destinations = other.install.warn_unused_destinations;
        }
    }

    /// The platform family to plan for.
    pub fn platform(&self) -> PlatformFamily {
        self.install.platform.unwrap_or_else(PlatformFamily::host)
    }

    /// Whether unused TARGETS destinations are reported.
    pub fn warn_unused_destinations(&self) -> bool {
        self.install.warn_unused_destinations.unwrap_or(true)
    }
}

/// Get the global harbour config directory (~/.harbour).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".harbour"))
}

/// Get the global install config path (~/.harbour/install.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("install.toml"))
}

/// Get the project install config path (.harbour/install.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".harbour").join("install.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.harbour/install.toml)
/// 2. Global config (~/.harbour/install.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

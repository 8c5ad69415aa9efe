use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::version::checker::Requirements;

// =============================================================================
// Compatibility constants
// =============================================================================

/// Default floor for the hosting runtime version
pub const DEFAULT_MINIMUM_RUNTIME_VERSION: &str = "1.85.0";

/// Oldest engine binary this release supports
pub const SUPPORTED_ENGINE_MINIMUM_VERSION: &str = "3.5.0";

/// Newest engine binary this release supports
pub const SUPPORTED_ENGINE_MAXIMUM_VERSION: &str = "3.99.99";

// =============================================================================
// Environment variables
// =============================================================================

/// Overrides the configuration file location
pub const CONFIG_PATH_ENV: &str = "ENGINE_COMPAT_CONFIG";

/// Log filter directives (tracing-subscriber `EnvFilter` syntax)
pub const LOG_FILTER_ENV: &str = "ENGINE_COMPAT_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Compatibility configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompatConfig {
    pub runtime: RuntimeConfig,
    pub engine: EngineConfig,
}

/// Hosting runtime requirements
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Runtime floor used when a check supplies none
    pub minimum_version: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            minimum_version: DEFAULT_MINIMUM_RUNTIME_VERSION.to_string(),
        }
    }
}

/// Native engine requirements
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub minimum_version: String,
    pub maximum_version: String,
    /// Engine installation directory holding the build-version file
    pub install_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_version: SUPPORTED_ENGINE_MINIMUM_VERSION.to_string(),
            maximum_version: SUPPORTED_ENGINE_MAXIMUM_VERSION.to_string(),
            install_dir: None,
        }
    }
}

impl CompatConfig {
    /// Read a configuration file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the configuration file at its default location, or fall back to
    /// defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        info!("Loading config from {:?}", path);
        Self::load_from(&path)
    }

    /// Requirements this configuration declares
    pub fn requirements(&self) -> Requirements {
        Requirements {
            minimum_runtime_version: self.runtime.minimum_version.clone(),
            minimum_engine_version: self.engine.minimum_version.clone(),
            maximum_engine_version: self.engine.maximum_version.clone(),
        }
    }
}

/// Returns the path to the configuration file.
/// Uses $ENGINE_COMPAT_CONFIG if set,
/// then $XDG_CONFIG_HOME/engine-compat/config.json,
/// then ~/.config/engine-compat/config.json,
/// or ./engine-compat/config.json if none is available.
pub fn config_path() -> PathBuf {
    config_path_with_env(
        std::env::var(CONFIG_PATH_ENV).ok(),
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
    )
}

fn config_path_with_env(
    explicit: Option<String>,
    xdg_config_home: Option<String>,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("engine-compat").join("config.json")
}

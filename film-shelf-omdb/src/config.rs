use std::path::{Path, PathBuf};

use crate::error::OmdbError;

/// Public OMDb API endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://www.omdbapi.com/";

/// Request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_KEY: &str = "OMDB_API_KEY";
const ENV_ENDPOINT: &str = "OMDB_URL";
const ENV_TIMEOUT: &str = "OMDB_TIMEOUT_SECS";

/// Settings for reaching the OMDb service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Per-request timeout in seconds; 0 disables it.
    pub timeout_secs: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Hard-coded default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug)]
pub struct ConfigSources {
    pub endpoint: ConfigSource,
    pub api_key: ConfigSource,
    pub timeout_secs: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    omdb: Option<OmdbFileConfig>,
}

#[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
struct OmdbFileConfig {
    endpoint: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

impl OmdbConfig {
    /// Load settings from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults.
    pub fn load() -> Result<Self, OmdbError> {
        let file = config_path().and_then(|p| load_config_file(&p));
        resolve(|var| std::env::var(var).ok(), file.as_ref())
    }

    /// Apply explicit values (e.g., from CLI args).
    pub fn with_overrides(mut self, endpoint: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = endpoint {
            self.endpoint = url;
        }
        if let Some(key) = api_key {
            self.api_key = Some(key);
        }
        self
    }
}

fn resolve(
    env: impl Fn(&str) -> Option<String>,
    file: Option<&OmdbFileConfig>,
) -> Result<OmdbConfig, OmdbError> {
    let endpoint = env(ENV_ENDPOINT)
        .or_else(|| file.and_then(|c| c.endpoint.clone()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key = env(ENV_API_KEY)
        .or_else(|| file.and_then(|c| c.api_key.clone()))
        .filter(|k| !k.is_empty());

    let timeout_secs = match env(ENV_TIMEOUT) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            OmdbError::Config(format!("{ENV_TIMEOUT} must be a whole number of seconds, got {raw:?}"))
        })?,
        None => file
            .and_then(|c| c.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    Ok(OmdbConfig {
        endpoint,
        api_key,
        timeout_secs,
    })
}

/// Return the path to the OMDb config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("film-shelf").join("omdb.toml"))
}

/// Save settings to the config file, creating parent directories as needed.
///
/// Values equal to the defaults are left out of the file.
/// Returns the path the file was written to.
pub fn save_to_file(config: &OmdbConfig) -> Result<PathBuf, OmdbError> {
    let path = config_path()
        .ok_or_else(|| OmdbError::Config("Could not determine config directory".to_string()))?;
    save_to_path(config, &path)?;
    Ok(path)
}

fn save_to_path(config: &OmdbConfig, path: &Path) -> Result<(), OmdbError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = ConfigFile {
        omdb: Some(OmdbFileConfig {
            endpoint: (config.endpoint != DEFAULT_ENDPOINT).then(|| config.endpoint.clone()),
            api_key: config.api_key.clone(),
            timeout_secs: (config.timeout_secs != DEFAULT_TIMEOUT_SECS)
                .then_some(config.timeout_secs),
        }),
    };

    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| OmdbError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Determine where each config field is coming from.
pub fn config_sources() -> ConfigSources {
    let file = config_path().and_then(|p| load_config_file(&p));
    sources(|var| std::env::var(var).is_ok(), file.as_ref())
}

fn sources(env_set: impl Fn(&str) -> bool, file: Option<&OmdbFileConfig>) -> ConfigSources {
    let endpoint = if env_set(ENV_ENDPOINT) {
        ConfigSource::EnvVar(ENV_ENDPOINT)
    } else if file.and_then(|c| c.endpoint.as_ref()).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let api_key = if env_set(ENV_API_KEY) {
        ConfigSource::EnvVar(ENV_API_KEY)
    } else if file.and_then(|c| c.api_key.as_ref()).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Missing
    };

    let timeout_secs = if env_set(ENV_TIMEOUT) {
        ConfigSource::EnvVar(ENV_TIMEOUT)
    } else if file.and_then(|c| c.timeout_secs).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    ConfigSources {
        endpoint,
        api_key,
        timeout_secs,
    }
}

fn load_config_file(path: &Path) -> Option<OmdbFileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.omdb,
        Err(e) => {
            log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

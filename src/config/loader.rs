//! Configuration loading from an env file and the process environment.

use std::collections::HashMap;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use crate::config::schema::{
    ListenerConfig, RelayConfig, RunMode, UnknownRunMode, UpstreamConfig, DEFAULT_PORT,
};

pub const API_KEY_VAR: &str = "API_SPORTS_KEY";
pub const BASE_URL_VAR: &str = "API_SPORTS_BASE_URL";
pub const PORT_VAR: &str = "PORT";
pub const MODE_VAR: &str = "RELAY_MODE";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("environment variable `{0}` must be set")]
    Missing(&'static str),

    #[error("invalid `PORT` value `{value}`: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid `RELAY_MODE`: {0}")]
    InvalidMode(#[from] UnknownRunMode),
}

/// Load configuration from the env file at `path`.
///
/// The file must exist. Variables already present in the process environment
/// take precedence over the file's values.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let file_vars = read_env_file(path)?;

    config_from_lookup(|key| {
        std::env::var(key)
            .ok()
            .or_else(|| file_vars.get(key).cloned())
    })
}

/// Parse an env file into a key/value map without touching the process
/// environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)
}

/// Build a [`RelayConfig`] from a variable lookup. Empty values count as unset.
pub fn config_from_lookup<F>(lookup: F) -> Result<RelayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
    let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

    let upstream = UpstreamConfig {
        api_key: required(API_KEY_VAR)?,
        base_url: required(BASE_URL_VAR)?,
    };

    let port = match get(PORT_VAR) {
        Some(value) => {
            let parsed = value.trim().parse::<u16>();
            parsed.map_err(|source| ConfigError::InvalidPort { value, source })?
        }
        None => DEFAULT_PORT,
    };

    let mode = get(MODE_VAR)
        .map(|value| value.parse::<RunMode>())
        .transpose()?
        .unwrap_or_default();

    Ok(RelayConfig {
        listener: ListenerConfig::on_port(port),
        upstream,
        mode,
    })
}

//! Configuration schema definitions.
//!
//! All values are resolved once at startup and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

/// Host identifier the upstream API expects in `x-rapidapi-host`.
pub const API_HOST: &str = "v3.football.api-sports.io";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream API credentials and location.
    pub upstream: UpstreamConfig,

    /// Operating mode, controls log verbosity and format.
    pub mode: RunMode,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Listen on all interfaces at the given port.
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_address: format!("0.0.0.0:{port}"),
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self::on_port(DEFAULT_PORT)
    }
}

/// Upstream sports-data API settings.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Key sent in `x-rapidapi-key`.
    pub api_key: String,

    /// Base URL, `/fixtures` is appended to it.
    pub base_url: String,
}

// Keeps the key out of `{:?}` output in startup logs.
impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Operating mode of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Verbose, human-readable logs.
    #[default]
    Debug,
    /// Quieter, JSON logs.
    Release,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Debug => "debug",
            RunMode::Release => "release",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode string is neither `debug` nor `release`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown run mode `{0}` (expected `debug` or `release`)")]
pub struct UnknownRunMode(pub String);

impl FromStr for RunMode {
    type Err = UnknownRunMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(RunMode::Debug),
            "release" => Ok(RunMode::Release),
            other => Err(UnknownRunMode(other.to_string())),
        }
    }
}

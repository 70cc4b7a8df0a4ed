//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file + process environment
//!     → loader.rs (read file, resolve variables, parse)
//!     → RelayConfig (immutable)
//!     → passed by value into HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - A missing env file is fatal; the process never starts half-configured
//! - Process environment overrides the file, so deployments can inject secrets
//! - Config is never re-read after startup

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, RelayConfig, RunMode, UpstreamConfig, API_HOST};

//! Fixtures relay library.
//!
//! Forwards `GET /api/fixtures` to a sports-data API with authentication
//! headers attached and returns the upstream body verbatim.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::shutdown_signal;

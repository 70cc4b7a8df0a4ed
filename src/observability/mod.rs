//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware emit tracing events
//!     → logging.rs (EnvFilter + fmt layer, chosen by RunMode)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every request span
//! - `RUST_LOG` always wins over the mode's default filter

pub mod logging;

pub use logging::init_logging;

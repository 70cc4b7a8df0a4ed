//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Build server → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs) resolves the future passed to HttpServer::run
//!     → server stops accepting → in-flight requests drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after config and client are ready

pub mod signals;

pub use signals::shutdown_signal;

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/cors.rs (OPTIONS short-circuit, CORS headers)
//!     → fixtures.rs (resolve query, call upstream)
//!     → raw upstream body, or response.rs (uniform JSON error)
//!     → Send to client
//! ```

pub mod fixtures;
pub mod middleware;
pub mod response;
pub mod server;

pub use response::RelayError;
pub use server::{AppState, HttpServer};

//! Upstream sports-data API access.
//!
//! # Data Flow
//! ```text
//! inbound query string
//!     → query.rs (first value per key, date defaulting)
//!     → UpstreamQuery
//!     → client.rs (URL build, auth headers, single GET, body read)
//!     → UpstreamResponse (status + raw bytes)
//! ```
//!
//! # Design Decisions
//! - The response body is never parsed; it is relayed as opaque bytes
//! - One attempt per inbound request, no retries
//! - No client-side timeout; transport defaults apply

pub mod client;
pub mod query;

pub use client::{FixturesClient, UpstreamError, UpstreamResponse, API_HOST_HEADER, API_KEY_HEADER};
pub use query::{FixturesQuery, UpstreamQuery};

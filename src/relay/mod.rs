//! Request relay subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/<resource>[/<key>]
//!     → handlers.rs (extract key, pick Resource)
//!     → validate.rs (format rule for the key; 400 on failure)
//!     → client.rs (one GET to the upstream API; 500 on failure)
//!     → resource.rs (truncate catalog lists)
//!     → Envelope { status: "success", data }
//! ```
//!
//! # Design Decisions
//! - Stateless: every request is validate → forward → envelope
//! - One upstream attempt, no timeout, no retry
//! - The upstream client is built once and shared through axum state

pub mod client;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod validate;

pub use client::UpstreamClient;
pub use error::{RelayError, UpstreamError};
pub use handlers::routes;
pub use resource::{Resource, CATALOG_LIMIT};
pub use validate::ValidationError;

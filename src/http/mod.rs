//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routes)
//!     → request.rs (request ID, tracing span)
//!     → relay handlers / site.rs
//!     → response.rs (envelope, status mapping)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod site;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::Envelope;
pub use server::{AppState, HttpServer};

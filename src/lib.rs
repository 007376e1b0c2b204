//! Brasil Relay library.
//!
//! A thin REST relay over the BrasilAPI public-data service: validate the
//! path parameter, forward one GET upstream, answer with a uniform envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

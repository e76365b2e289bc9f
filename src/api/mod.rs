//! Deployment management API layer
//!
//! Provides a trait-based abstraction over HTTP for testability.

pub mod client;
pub mod endpoints;
pub mod request;
pub mod traits;

pub use client::EssClient;
pub use endpoints::{ApiContext, Endpoints, ProxyTarget, DEFAULT_API_ENDPOINT};
pub use request::{ApiRequest, ApiResponse, Method};
pub use traits::ApiTransport;

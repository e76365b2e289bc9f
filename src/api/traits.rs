//! Trait definitions for API calls
//!
//! These traits abstract over the HTTP client to enable testing with mocks.

use crate::api::request::{ApiRequest, ApiResponse};
use crate::error::ApiError;
use serde::de::DeserializeOwned;

/// Trait for issuing authenticated requests to the management API
///
/// Implementations return the body for any status code; callers decide which
/// statuses they accept.
pub trait ApiTransport {
    /// Send a request and read the full response body
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;

    /// Send a request and decode the body as JSON, whatever the status
    fn send_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let response = self.send(request)?;
        log::debug!("Response Body: {}", response.text());
        Ok(serde_json::from_slice(&response.body)?)
    }
}

//! reqwest-backed implementation of the API transport

use crate::api::request::{ApiRequest, ApiResponse, Method};
use crate::api::traits::ApiTransport;
use crate::error::ApiError;

use reqwest::blocking::Client;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("ess/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTPS client shared by every call of one invocation
pub struct EssClient {
    client: Client,
}

impl EssClient {
    /// Build a client with an optional per-request timeout
    ///
    /// `None` disables the timeout entirely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ApiError> {
        match timeout {
            Some(t) => log::debug!("Request timeout: {}s", t.as_secs()),
            None => log::debug!("Request timeout: none"),
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ApiTransport for EssClient {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method, request.url);

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let transport_err = |e: reqwest::Error| ApiError::Transport {
            url: request.url.clone(),
            message: e.to_string(),
        };

        let response = builder.send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport_err)?;
        log::debug!("{} {} -> {}", request.method, request.url, status);

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

//! Request and response types exchanged with the transport

use std::borrow::Cow;
use std::fmt;

/// Header carrying the API key
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header marking proxied calls as management requests
pub const MANAGEMENT_HEADER: &str = "X-Management-Request";

/// HTTP methods used by the management API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// An authenticated request to a fully-formed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(method: Method, url: String, api_key: &str) -> Self {
        Self {
            method,
            url,
            headers: vec![(AUTHORIZATION_HEADER, format!("ApiKey {}", api_key))],
        }
    }

    /// Authenticated GET request
    pub fn get(url: impl Into<String>, api_key: &str) -> Self {
        Self::new(Method::Get, url.into(), api_key)
    }

    /// Authenticated POST request with an empty body
    pub fn post(url: impl Into<String>, api_key: &str) -> Self {
        Self::new(Method::Post, url.into(), api_key)
    }

    /// Mark the request as a management request (proxied commands)
    pub fn management(mut self) -> Self {
        self.headers.push((MANAGEMENT_HEADER, "true".to_string()));
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and the full body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is exactly 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

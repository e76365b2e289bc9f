//! Mock implementations for testing
//!
//! Provides a scripted API transport for unit testing without network access.

use crate::api::{ApiRequest, ApiResponse, ApiTransport};
use crate::error::ApiError;

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted outcome for one request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Answer with a status and body
    Response(ApiResponse),
    /// Fail as if the connection broke
    Failure(String),
}

/// Mock transport answering from per-URL reply queues
///
/// Every request is recorded. A URL without a queued reply fails with a
/// transport error.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<MockReply>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Create a transport with no scripted replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: queue a response for `url`
    pub fn with_response(self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.push(url.into(), MockReply::Response(ApiResponse::new(status, body)));
        self
    }

    /// Builder: queue a transport failure for `url`
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.push(url.into(), MockReply::Failure(message.into()));
        self
    }

    fn push(&self, url: String, reply: MockReply) {
        self.replies
            .lock()
            .unwrap()
            .entry(url)
            .or_default()
            .push_back(reply);
    }

    /// All requests sent so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs of all requests sent so far, in order
    pub fn request_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl ApiTransport for MockTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&request.url)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(message)) => Err(ApiError::Transport {
                url: request.url.clone(),
                message,
            }),
            None => Err(ApiError::Transport {
                url: request.url.clone(),
                message: "no mock reply queued".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replies_in_order() {
        let mock = MockTransport::new()
            .with_response("u", 200, "first")
            .with_response("u", 404, "second");

        let req = ApiRequest::get("u", "k");
        assert_eq!(mock.send(&req).unwrap().body, b"first");
        assert_eq!(mock.send(&req).unwrap().status, 404);
        assert!(mock.send(&req).is_err());
        assert_eq!(mock.requests().len(), 3);
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockTransport::new().with_failure("u", "connection refused");
        let err = mock.send(&ApiRequest::get("u", "k")).unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}

use serde::{Deserialize, Serialize};

/// Acknowledgment envelope shared by every mutating route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    pub fn ok() -> Self {
        Self::new("ok")
    }

    pub fn ko() -> Self {
        Self::new("ko")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SitemapResponse {
    pub endpoints: Vec<EndpointInfo>,
}

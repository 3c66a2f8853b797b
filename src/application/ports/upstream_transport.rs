use async_trait::async_trait;
use serde_json::Value;

use super::provider_adapter::OutboundRequest;

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn post_json(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// `None` when the body was not valid JSON.
    pub body: Option<Value>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    RequestFailed(String),
}

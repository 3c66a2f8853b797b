use async_trait::async_trait;

use crate::domain::RelayRequest;

/// Client side of the relay endpoints.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn generate(&self, provider: &str, request: &RelayRequest)
    -> Result<String, RelayClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RelayClientError {
    /// The relay answered with a non-success status; the message is user-facing.
    #[error("{0}")]
    Rejected(String),
    #[error("relay unreachable: {0}")]
    Unreachable(String),
    #[error("invalid relay response: {0}")]
    InvalidResponse(String),
}

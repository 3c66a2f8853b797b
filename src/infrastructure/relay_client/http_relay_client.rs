use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{RelayClient, RelayClientError};
use crate::application::services::capitalize;
use crate::domain::RelayRequest;

/// Talks to a running relay over HTTP.
pub struct HttpRelayClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SuccessBody {
    response: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpRelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn generate(
        &self,
        provider: &str,
        request: &RelayRequest,
    ) -> Result<String, RelayClientError> {
        let response = self
            .client
            .post(format!("{}/api/{}", self.base_url, provider))
            .json(request)
            .send()
            .await
            .map_err(|e| RelayClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(RelayClientError::Rejected(format!(
                "{}: {}",
                capitalize(provider),
                message
            )));
        }

        response
            .json::<SuccessBody>()
            .await
            .map(|body| body.response)
            .map_err(|e| RelayClientError::InvalidResponse(e.to_string()))
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::application::ports::{
    OutboundRequest, TransportError, UpstreamResponse, UpstreamTransport,
};

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamTransport for ReqwestTransport {
    async fn post_json(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportError> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::RequestFailed(e.without_url().to_string()))?;
        let body = serde_json::from_slice::<Value>(&bytes).ok();

        Ok(UpstreamResponse { status, body })
    }
}

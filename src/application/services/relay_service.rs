use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{
    ProviderAdapter, ProviderError, TransportError, UpstreamPrompt, UpstreamTransport, UserPart,
};
use crate::domain::RelayRequest;
use crate::infrastructure::observability::sanitize_prompt;

use super::prompt_builder::build_system_prompt;

/// Non-image file content is cut to this many characters before it joins the prompt.
pub const MAX_FILE_CONTEXT_CHARS: usize = 5000;

pub struct RelayService<T>
where
    T: UpstreamTransport,
{
    transport: Arc<T>,
    adapters: HashMap<&'static str, Arc<dyn ProviderAdapter>>,
}

impl<T> RelayService<T>
where
    T: UpstreamTransport,
{
    pub fn new(transport: Arc<T>, adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self {
            transport,
            adapters: adapters
                .into_iter()
                .map(|adapter| (adapter.id(), adapter))
                .collect(),
        }
    }

    pub fn providers(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.adapters.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[tracing::instrument(skip(self, request), fields(detail = %request.response_detail))]
    pub async fn relay(&self, provider: &str, request: &RelayRequest) -> Result<String, RelayError> {
        let adapter = self
            .adapters
            .get(provider)
            .ok_or_else(|| RelayError::UnknownProvider(provider.to_string()))?;

        if request.prompt.trim().is_empty() {
            return Err(RelayError::EmptyPrompt);
        }

        let api_key = adapter
            .api_key()
            .filter(|key| !key.trim().is_empty())
            .ok_or(RelayError::MissingCredential(adapter.display_name()))?;

        tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Relaying prompt");

        let prompt = build_upstream_prompt(request);
        let outbound = adapter.build_request(&prompt, api_key);

        let response = self
            .transport
            .post_json(outbound)
            .await
            .map_err(|e| RelayError::Transport {
                provider: adapter.id(),
                source: e,
            })?;

        if !response.is_success() {
            let message = response
                .body
                .as_ref()
                .and_then(|body| adapter.extract_error_message(body))
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            tracing::error!(
                provider = adapter.id(),
                status = response.status,
                error = %sanitize_prompt(&message),
                "Upstream provider error"
            );
            return Err(RelayError::Upstream {
                status: response.status,
                message,
            });
        }

        let body = response.body.ok_or(RelayError::InvalidResponse {
            provider: adapter.id(),
            source: ProviderError::MalformedResponse("JSON body"),
        })?;

        adapter
            .parse_response(&body)
            .map_err(|e| RelayError::InvalidResponse {
                provider: adapter.id(),
                source: e,
            })
    }
}

/// Provider-agnostic prompt: the question, then either an inline image or a
/// truncated JSON context block. Empty text content counts as no file.
pub fn build_upstream_prompt(request: &RelayRequest) -> UpstreamPrompt {
    let mut user_parts = vec![UserPart::Text(request.prompt.clone())];

    let attached = request
        .file_content
        .as_ref()
        .filter(|content| !content.is_blank());

    if let Some(content) = attached {
        let inline_image = request
            .has_image()
            .then(|| content.as_text())
            .flatten()
            .zip(request.file_type.as_deref());

        match inline_image {
            Some((data, mime_type)) => user_parts.push(UserPart::InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
            None => {
                let context = content.truncated_json(MAX_FILE_CONTEXT_CHARS);
                user_parts.push(UserPart::Text(format!("\n\nFile Context:\n{context}")));
            }
        }
    }

    UpstreamPrompt {
        system_instruction: build_system_prompt(request.response_detail),
        user_parts,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid provider specified")]
    UnknownProvider(String),
    #[error("Prompt is required")]
    EmptyPrompt,
    #[error("{0} API key not configured")]
    MissingCredential(&'static str),
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("Failed to generate response with {provider}")]
    Transport {
        provider: &'static str,
        #[source]
        source: TransportError,
    },
    #[error("Failed to generate response with {provider}")]
    InvalidResponse {
        provider: &'static str,
        #[source]
        source: ProviderError,
    },
}

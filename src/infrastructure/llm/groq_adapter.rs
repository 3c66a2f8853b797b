use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{OutboundRequest, ProviderAdapter, ProviderError, UpstreamPrompt};

pub const GROQ_DEFAULT_BASE_URL: &str = "https://api.groq.com";
pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq's OpenAI-compatible chat completions. Text only: inline image parts
/// are dropped before sending.
pub struct GroqAdapter {
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl GroqAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            max_tokens,
        }
    }
}

impl ProviderAdapter for GroqAdapter {
    fn id(&self) -> &'static str {
        "groq"
    }

    fn display_name(&self) -> &'static str {
        "Groq"
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn build_request(&self, prompt: &UpstreamPrompt, api_key: &str) -> OutboundRequest {
        if prompt.has_inline_data() {
            tracing::debug!("Groq has no multimodal input, dropping inline file data");
        }

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system_instruction.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.text_parts().collect::<Vec<_>>().join("\n"),
                },
            ],
            max_tokens: self.max_tokens,
        };

        OutboundRequest {
            url: format!("{}/openai/v1/chat/completions", self.base_url),
            headers: vec![("Authorization", format!("Bearer {api_key}"))],
            body: serde_json::to_value(&body).unwrap_or_default(),
        }
    }

    fn parse_response(&self, body: &Value) -> Result<String, ProviderError> {
        let response = ChatCompletionResponse::deserialize(body)
            .map_err(|_| ProviderError::MalformedResponse("choices"))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::MalformedResponse("choices[0].message.content"))
    }
}

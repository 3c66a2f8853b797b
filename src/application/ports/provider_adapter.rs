use serde_json::Value;

/// Translates the uniform prompt into one provider's wire format and back.
pub trait ProviderAdapter: Send + Sync {
    /// Path segment the relay endpoint is mounted under, e.g. `gemini`.
    fn id(&self) -> &'static str;

    /// Human-facing provider name used in error messages.
    fn display_name(&self) -> &'static str;

    fn api_key(&self) -> Option<&str>;

    fn build_request(&self, prompt: &UpstreamPrompt, api_key: &str) -> OutboundRequest;

    fn parse_response(&self, body: &Value) -> Result<String, ProviderError>;

    fn extract_error_message(&self, body: &Value) -> Option<String> {
        body.pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Provider-agnostic prompt: system instruction plus ordered user parts.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamPrompt {
    pub system_instruction: String,
    pub user_parts: Vec<UserPart>,
}

impl UpstreamPrompt {
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.user_parts.iter().filter_map(|part| match part {
            UserPart::Text(text) => Some(text.as_str()),
            UserPart::InlineData { .. } => None,
        })
    }

    pub fn has_inline_data(&self) -> bool {
        self.user_parts
            .iter()
            .any(|part| matches!(part, UserPart::InlineData { .. }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserPart {
    Text(String),
    InlineData { mime_type: String, data: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("unexpected response shape: missing {0}")]
    MalformedResponse(&'static str),
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{
    OutboundRequest, ProviderAdapter, ProviderError, UpstreamPrompt, UserPart,
};

pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Google Gemini `generateContent`. Accepts inline image parts.
pub struct GeminiAdapter {
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            max_output_tokens,
        }
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn id(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Gemini"
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn build_request(&self, prompt: &UpstreamPrompt, api_key: &str) -> OutboundRequest {
        let parts = prompt
            .user_parts
            .iter()
            .map(|part| match part {
                UserPart::Text(text) => Part::Text { text },
                UserPart::InlineData { mime_type, data } => Part::InlineData {
                    inline_data: InlineData { mime_type, data },
                },
            })
            .collect();

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part::Text {
                    text: &prompt.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
            },
        };

        OutboundRequest {
            url: format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ),
            headers: vec![("x-goog-api-key", api_key.to_string())],
            body: serde_json::to_value(&body).unwrap_or_default(),
        }
    }

    fn parse_response(&self, body: &Value) -> Result<String, ProviderError> {
        let response = GenerateContentResponse::deserialize(body)
            .map_err(|_| ProviderError::MalformedResponse("candidates"))?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(ProviderError::MalformedResponse("candidates[0].content.parts[0].text"))
    }
}

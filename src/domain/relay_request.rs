use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::detail_level::DetailLevel;

/// Uniform payload accepted by every relay endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub file_content: Option<FileContent>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub response_detail: DetailLevel,
}

impl RelayRequest {
    pub fn new(prompt: impl Into<String>, response_detail: DetailLevel) -> Self {
        Self {
            prompt: prompt.into(),
            file_content: None,
            file_type: None,
            response_detail,
        }
    }

    pub fn with_file(mut self, content: Option<FileContent>, file_type: Option<String>) -> Self {
        self.file_content = content;
        self.file_type = file_type;
        self
    }

    pub fn has_image(&self) -> bool {
        self.file_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

/// Extracted content of an ingested file, in the shape it travels over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    /// Plain text, or base64 bytes for images.
    Text(String),
    /// Delimited-text rows keyed by header, column order preserved.
    Records(Vec<Map<String, Value>>),
    /// Workbook rows as positional arrays.
    Grid(Vec<Vec<Value>>),
    Other(Value),
}

impl FileContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_text().is_some_and(str::is_empty)
    }

    /// JSON form of the content cut to at most `max_chars` characters.
    pub fn truncated_json(&self, max_chars: usize) -> String {
        let serialized = serde_json::to_string(self).unwrap_or_default();
        match serialized.char_indices().nth(max_chars) {
            Some((cut, _)) => serialized[..cut].to_string(),
            None => serialized,
        }
    }
}

use serde::Deserialize;

/// One entry of the static FAQ feed. `answer` is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickAnswer {
    pub question: String,
    pub answer: String,
}

impl QuickAnswer {
    pub fn parse_feed(json: &str) -> Result<Vec<QuickAnswer>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{MarkdownConverter, RelayClient};
use crate::domain::{ChartSpec, DetailLevel, FileContent, RelayRequest, UploadedFile};

use super::answer_renderer::{AnswerRenderer, ProcessedContent};
use super::file_ingestor::{FileIngestor, loaded_message};

const PREVIEW_ROWS: usize = 6;
const MISSING_KEY_MARKER: &str = "API key not configured";

/// Everything the UI remembers between actions.
#[derive(Debug, Default)]
pub struct SessionState {
    pub current_file: Option<String>,
    pub file_content: Option<FileContent>,
    pub file_type: Option<String>,
    pub is_generating: bool,
    pub charts: Vec<&'static ChartSpec>,
    read_generation: u64,
}

/// Handle for one in-flight file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the newly selected file and supersedes any read still pending.
    pub fn begin_file_read(&mut self, name: &str, mime_type: &str) -> ReadTicket {
        self.read_generation += 1;
        self.current_file = Some(name.to_string());
        self.file_type = Some(mime_type.to_string());
        ReadTicket(self.read_generation)
    }

    /// Stores the read result unless a newer read has started since. Returns
    /// whether the result was kept.
    pub fn complete_file_read(&mut self, ticket: ReadTicket, content: Option<FileContent>) -> bool {
        if ticket.0 != self.read_generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.read_generation,
                "Discarding stale file read"
            );
            return false;
        }
        self.file_content = content;
        true
    }

    pub fn clear_file(&mut self) {
        self.read_generation += 1;
        self.current_file = None;
        self.file_content = None;
        self.file_type = None;
    }

    fn build_request(&self, query: &str, detail: DetailLevel) -> RelayRequest {
        RelayRequest::new(query, detail).with_file(self.file_content.clone(), self.file_type.clone())
    }
}

#[derive(Debug, Clone)]
pub enum UiCommand {
    SelectFile(UploadedFile),
    RemoveFile,
    Generate {
        query: String,
        provider: String,
        detail: DetailLevel,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    FileSelected(String),
    FileCleared,
    Preview(FilePreview),
    Notification(String),
    Error(String),
    Loading(bool),
    Content(ProcessedContent),
}

/// First rows of a workbook, first row treated as header.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

impl FilePreview {
    pub fn from_grid(grid: &[Vec<Value>]) -> Option<Self> {
        let (header, body) = grid.split_first()?;
        let visible = body.len().min(PREVIEW_ROWS - 1);
        Some(Self {
            headers: header.iter().map(cell_text).collect(),
            rows: body[..visible]
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect(),
            total_rows: grid.len(),
        })
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Maps UI commands to their handlers. Holds no state of its own.
pub struct UiController<R, M>
where
    R: RelayClient + ?Sized,
    M: MarkdownConverter + ?Sized,
{
    relay_client: Arc<R>,
    ingestor: Arc<FileIngestor>,
    renderer: AnswerRenderer<M>,
}

impl<R, M> UiController<R, M>
where
    R: RelayClient + ?Sized,
    M: MarkdownConverter + ?Sized,
{
    pub fn new(relay_client: Arc<R>, ingestor: Arc<FileIngestor>, renderer: AnswerRenderer<M>) -> Self {
        Self {
            relay_client,
            ingestor,
            renderer,
        }
    }

    pub async fn dispatch(&self, session: &mut SessionState, command: UiCommand) -> Vec<UiEffect> {
        match command {
            UiCommand::SelectFile(file) => self.select_file(session, file).await,
            UiCommand::RemoveFile => remove_file(session),
            UiCommand::Generate {
                query,
                provider,
                detail,
            } => self.generate(session, &query, &provider, detail).await,
        }
    }

    async fn select_file(&self, session: &mut SessionState, file: UploadedFile) -> Vec<UiEffect> {
        let ticket = session.begin_file_read(&file.name, &file.mime_type);
        let mut effects = vec![UiEffect::FileSelected(file.name.clone())];

        match self.ingestor.ingest(&file).await {
            Ok(ingested) => {
                let preview = match &ingested.content {
                    Some(FileContent::Grid(grid)) => FilePreview::from_grid(grid),
                    _ => None,
                };
                if session.complete_file_read(ticket, ingested.content) {
                    effects.extend(preview.map(UiEffect::Preview));
                    effects.push(UiEffect::Notification(
                        loaded_message(ingested.kind).to_string(),
                    ));
                }
            }
            Err(e) => {
                session.complete_file_read(ticket, None);
                effects.push(UiEffect::Error(e.to_string()));
            }
        }

        effects
    }

    async fn generate(
        &self,
        session: &mut SessionState,
        query: &str,
        provider: &str,
        detail: DetailLevel,
    ) -> Vec<UiEffect> {
        let query = query.trim();
        if query.is_empty() {
            return vec![UiEffect::Error(
                "Please enter a question about Excel".to_string(),
            )];
        }

        session.is_generating = true;
        let mut effects = vec![UiEffect::Loading(true)];

        let request = session.build_request(query, detail);
        match self.relay_client.generate(provider, &request).await {
            Ok(answer) if !answer.is_empty() => {
                effects.push(self.show_content(session, &answer));
                effects.push(UiEffect::Notification(format!(
                    "Guide generated successfully using {}!",
                    capitalize(provider)
                )));
            }
            Ok(_) => effects.push(UiEffect::Error(
                "Error: Received an empty response from the server.".to_string(),
            )),
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(provider, error = %message, "Generation failed");
                effects.push(UiEffect::Error(format!("Error: {message}")));
                if message.contains(MISSING_KEY_MARKER) {
                    effects.push(self.show_content(session, &demo_content(query)));
                    effects.push(UiEffect::Notification(
                        "Demo content loaded. Add an API key for personalized responses!"
                            .to_string(),
                    ));
                }
            }
        }

        session.is_generating = false;
        effects.push(UiEffect::Loading(false));
        effects
    }

    fn show_content(&self, session: &mut SessionState, markdown: &str) -> UiEffect {
        let content = self.renderer.render(markdown);
        session.charts = content.charts.clone();
        UiEffect::Content(content)
    }
}

fn remove_file(session: &mut SessionState) -> Vec<UiEffect> {
    session.clear_file();
    vec![
        UiEffect::FileCleared,
        UiEffect::Notification("File removed".to_string()),
    ]
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Placeholder guide rendered when no provider credential is configured.
pub fn demo_content(query: &str) -> String {
    format!(
        r#"# Excel Guide: {query}

## Introduction

This is a demo response for your query: "{query}". With a provider API key configured on the server, this would be replaced with a detailed, AI-generated guide.

## Steps to Implement

1. **Get an API Key**: Visit the provider's website (Google Gemini or Groq) to get a free API key.
2. **Configure the Server**: Set `GEMINI_API_KEY` or `GROQ_API_KEY` before starting the relay.
3. **Generate Guide**: Ask your question again to get a personalized guide.

## Example

Here's a simple example of how to use VLOOKUP:

```excel
=VLOOKUP("Apple", A2:C10, 3, FALSE)
```

This formula looks for "Apple" in column A and returns the corresponding value from column C.

## Tips

- Always use FALSE for exact matches in VLOOKUP
- Ensure your data is properly formatted
- Use named ranges for easier formulas
"#
    )
}

mod answer_renderer;
mod chart_resolver;
mod content_processor;
mod file_ingestor;
mod prompt_builder;
mod relay_service;
mod session;

pub use answer_renderer::{AnswerRenderer, ProcessedContent};
pub use chart_resolver::{DEFAULT_CHART_KEY, extract_chart_keyword, resolve_chart};
pub use content_processor::{
    BODY_CELL_CLASS, CODE_BLOCK_CLASS, DEFAULT_IMAGE_ALT, HEADER_CELL_CLASS, IMAGE_CLASS,
    TABLE_CLASS, process_content,
};
pub use file_ingestor::{FileIngestor, IngestionError, loaded_message};
pub use prompt_builder::{
    BASE_PERSONA, CONCISE_DIRECTIVE, DETAILED_DIRECTIVE, build_system_prompt,
};
pub use relay_service::{MAX_FILE_CONTEXT_CHARS, RelayError, RelayService, build_upstream_prompt};
pub use session::{
    FilePreview, ReadTicket, SessionState, UiCommand, UiController, UiEffect, capitalize,
    demo_content,
};
